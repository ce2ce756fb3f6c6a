//! Environment source: FRAMEKB__SECTION__KEY variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Add the environment override source. List-valued keys accept comma-separated values.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FRAMEKB")
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("knowledge_base.topics")
            .with_list_parse_key("scan.image_extensions")
            .try_parsing(true),
    )
}
