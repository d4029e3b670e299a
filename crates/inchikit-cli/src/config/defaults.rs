#[derive(Debug, Default)]
pub struct DefaultsConfig {
    pub options: String,
    pub sdf_options: String,
}
