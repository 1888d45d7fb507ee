use derive_getters::Getters;

/// Where the gym backend lives. Built once at startup and managed by Rocket.
#[derive(Getters, Debug, Clone)]
pub struct GymApiConfig {
    host: String,
}

impl GymApiConfig {
    pub fn new(host: String) -> Self {
        Self { host }
    }
}
