//! Sub-provider credentials
//!
//! One optional secret per sub-provider, read once at startup and passed
//! explicitly to each category client.

use crate::core::category::Category;
use crate::core::constants::env;
use std::fmt;

/// Secrets for every sub-provider. Empty values are treated as unset.
#[derive(Clone, Default)]
pub struct CredentialSet {
    pub unicourt_api_key: Option<String>,
    pub pacer_username: Option<String>,
    pub pacer_password: Option<String>,
    pub courtlistener_token: Option<String>,
    pub legiscan_api_key: Option<String>,

    pub propmix_api_key: Option<String>,
    pub bridge_api_key: Option<String>,
    pub first_american_api_key: Option<String>,
    pub rentcast_api_key: Option<String>,
    pub housecanary_api_key: Option<String>,

    pub business_api_key: Option<String>,

    pub data_gov_api_key: Option<String>,

    pub background_api_key: Option<String>,
    pub checkr_api_key: Option<String>,
    pub gridlines_api_key: Option<String>,
    pub idenfy_api_key: Option<String>,

    pub vehicle_api_key: Option<String>,
    pub vindata_api_key: Option<String>,
    pub idscan_api_key: Option<String>,
}

/// True when the secret is present and non-empty
pub fn is_set(secret: &Option<String>) -> bool {
    secret.as_deref().is_some_and(|s| !s.is_empty())
}

impl CredentialSet {
    /// Read every secret from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every secret through `lookup`, dropping empty values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            unicourt_api_key: get(env::UNICOURT_API_KEY),
            pacer_username: get(env::PACER_USERNAME),
            pacer_password: get(env::PACER_PASSWORD),
            courtlistener_token: get(env::COURTLISTENER_TOKEN),
            legiscan_api_key: get(env::LEGISCAN_API_KEY),
            propmix_api_key: get(env::PROPMIX_API_KEY),
            bridge_api_key: get(env::BRIDGE_API_KEY),
            first_american_api_key: get(env::FIRST_AMERICAN_API_KEY),
            rentcast_api_key: get(env::RENTCAST_API_KEY),
            housecanary_api_key: get(env::HOUSECANARY_API_KEY),
            business_api_key: get(env::BUSINESS_API_KEY),
            data_gov_api_key: get(env::DATA_GOV_API_KEY),
            background_api_key: get(env::BACKGROUND_API_KEY),
            checkr_api_key: get(env::CHECKR_API_KEY),
            gridlines_api_key: get(env::GRIDLINES_API_KEY),
            idenfy_api_key: get(env::IDENFY_API_KEY),
            vehicle_api_key: get(env::VEHICLE_API_KEY),
            vindata_api_key: get(env::VINDATA_API_KEY),
            idscan_api_key: get(env::IDSCAN_API_KEY),
        }
    }

    /// Every secret belonging to `category`, paired with its variable name
    fn secrets(&self, category: Category) -> Vec<(&'static str, &Option<String>)> {
        match category {
            Category::Court => vec![
                (env::UNICOURT_API_KEY, &self.unicourt_api_key),
                (env::PACER_USERNAME, &self.pacer_username),
                (env::PACER_PASSWORD, &self.pacer_password),
                (env::COURTLISTENER_TOKEN, &self.courtlistener_token),
                (env::LEGISCAN_API_KEY, &self.legiscan_api_key),
            ],
            Category::Property => vec![
                (env::PROPMIX_API_KEY, &self.propmix_api_key),
                (env::BRIDGE_API_KEY, &self.bridge_api_key),
                (env::FIRST_AMERICAN_API_KEY, &self.first_american_api_key),
                (env::RENTCAST_API_KEY, &self.rentcast_api_key),
                (env::HOUSECANARY_API_KEY, &self.housecanary_api_key),
            ],
            Category::Business => vec![(env::BUSINESS_API_KEY, &self.business_api_key)],
            Category::Government => vec![(env::DATA_GOV_API_KEY, &self.data_gov_api_key)],
            Category::Background => vec![
                (env::BACKGROUND_API_KEY, &self.background_api_key),
                (env::CHECKR_API_KEY, &self.checkr_api_key),
                (env::GRIDLINES_API_KEY, &self.gridlines_api_key),
                (env::IDENFY_API_KEY, &self.idenfy_api_key),
            ],
            Category::Vehicle => vec![
                (env::VEHICLE_API_KEY, &self.vehicle_api_key),
                (env::VINDATA_API_KEY, &self.vindata_api_key),
                (env::IDSCAN_API_KEY, &self.idscan_api_key),
            ],
        }
    }

    /// True if ANY sub-provider secret of `category` is set
    pub fn is_configured(&self, category: Category) -> bool {
        self.secrets(category)
            .into_iter()
            .any(|(_, secret)| is_set(secret))
    }

    /// Variable names of every category, for usage output
    pub fn variable_names(category: Category) -> Vec<&'static str> {
        Self::default()
            .secrets(category)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }
}

impl fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_map();
        for category in Category::ALL {
            for (name, secret) in self.secrets(category) {
                out.entry(&name, &if is_set(secret) { "<redacted>" } else { "<unset>" });
            }
        }
        out.finish()
    }
}
