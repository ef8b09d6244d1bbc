//! Static cleaning plan for the ESS climate module
//!
//! Every lookup the pipeline applies is fixed data defined here: the
//! columns to drop, the columns to coerce, the variable-code rename map,
//! the label maps, and the ordinal bucket labels. Nothing is derived
//! from the input.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use surveyclean_transforms::BucketLabels;

/// Export metadata columns stripped before analysis
pub const METADATA_COLUMNS: &[&str] = &["Unnamed: 0", "name", "essround", "edition", "proddate"];

/// Ordinal-coded columns converted to nullable integers
pub const INTEGER_COLUMNS: &[&str] = &[
    "eneffap", "rdcenr", "cflsenr", "elgcoal", "elgngas", "elghydr", "elgnuc", "elgsun", "elgwind",
    "elgbio", "ccnthum", "ccrdprs", "ccgdbd", "lkredcc", "lklmten", "gvsrdcc", "ownrdcc",
];

/// ESS technical variable codes → descriptive column names
pub static RENAME_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Energy-saving actions
        ("eneffap", "prob_acquisto_apparecchio_efficiente"),
        ("rdcenr", "freq_azioni_risparmio_energ"),
        ("cflsenr", "confidenza_ridurre_consumo_energ"),
        ("elgcoal", "quota_elettr_da_carbone"),
        ("elgngas", "quota_elettr_da_gas_naturale"),
        ("elghydr", "quota_elettr_da_idroelettrico"),
        // Electricity source shares
        ("elgnuc", "quota_elettr_da_nucleare"),
        ("elgsun", "quota_elettr_da_solare"),
        ("elgwind", "quota_elettr_da_eolico"),
        ("elgbio", "quota_elettr_da_biomassa"),
        // Worries about energy supply
        ("wrpwrct", "preoccupa_tagli_elettr"),
        ("wrenexp", "preoccupa_energ_troppo_costosa"),
        ("wrdpimp", "preoccupa_dipend_import_energ"),
        ("wrdpfos", "preoccupa_dipend_combust_fossili"),
        ("wrntdis", "preoccupa_interruz_disastri_nat"),
        ("wrinspw", "preoccupa_interruz_produz_insuff"),
        ("wrtcfl", "preoccupa_interruz_guasti_tecnici"),
        ("wrtratc", "preoccupa_interruz_attacc_terror"),
        // Climate-change opinions
        ("clmchng", "opinione_clima_sta_cambiando"),
        ("clmthgt1", "quanto_ci_pensa_negazionista"),
        ("clmthgt2", "quanto_ci_pensa_non_negazionista"),
        ("ccnthum", "cause_cambiamento_climatico"),
        ("ccrdprs", "responsabilita_personale_clima"),
        // Worry and likelihood of action
        ("wrclmch", "preoccup_camb_clima"),
        ("ccgdbd", "impatto_globale_clima"),
        ("lkredcc", "impatto_rid_energ_larga_scala"),
        ("lklmten", "prob_rid_energ_larga_scala"),
        ("gvsrdcc", "prob_intervent_governi"),
        // Personal efficacy and policy stances
        ("ownrdcc", "efficacia_azione_personale"),
        ("inctxff", "posizione_increm_tasse_fossili"),
        ("sbsrnen", "posizione_sussidi_energ_rinn"),
        ("banhhap", "posizione_divieto_elettrodom_inef"),
    ])
});

/// How often the respondent takes energy-saving actions (6-point scale)
pub static SAVING_FREQUENCY_LABELS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Never"),
        (2, "Hardly ever"),
        (3, "Sometimes"),
        (4, "Often"),
        (5, "Very often"),
        (6, "Always"),
    ])
});

/// Whether the respondent believes the climate is changing (4-point scale)
pub static CLIMATE_BELIEF_LABELS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Definitely changing"),
        (2, "Probably changing"),
        (3, "Probably not changing"),
        (4, "Definitely not changing"),
    ])
});

/// How much thought the respondent has given to climate change (5-point scale)
pub static THOUGHT_EXTENT_LABELS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Not at all"),
        (2, "Very little"),
        (3, "Some"),
        (4, "A lot"),
        (5, "A great deal"),
    ])
});

/// Column recoded with [`SAVING_FREQUENCY_LABELS`]
pub const SAVING_FREQUENCY_COLUMN: &str = "freq_azioni_risparmio_energ";

/// Column recoded with [`CLIMATE_BELIEF_LABELS`]
pub const CLIMATE_BELIEF_COLUMN: &str = "opinione_clima_sta_cambiando";

/// Columns recoded with [`THOUGHT_EXTENT_LABELS`]: one asked of
/// respondents who deny climate change, one of everyone else
pub const THOUGHT_EXTENT_COLUMNS: &[&str] = &[
    "quanto_ci_pensa_negazionista",
    "quanto_ci_pensa_non_negazionista",
];

/// Electricity source share columns (low codes mean a large share)
pub const ENERGY_SHARE_COLUMNS: &[&str] = &[
    "quota_elettr_da_carbone",
    "quota_elettr_da_gas_naturale",
    "quota_elettr_da_idroelettrico",
    "quota_elettr_da_nucleare",
    "quota_elettr_da_solare",
    "quota_elettr_da_eolico",
    "quota_elettr_da_biomassa",
];

pub const ENERGY_SHARE_BUCKETS: BucketLabels = BucketLabels {
    low: "Large",
    middle: "Medium",
    high: "Small",
};

/// Energy supply worry columns
pub const SUPPLY_WORRY_COLUMNS: &[&str] = &[
    "preoccupa_tagli_elettr",
    "preoccupa_energ_troppo_costosa",
    "preoccupa_dipend_import_energ",
    "preoccupa_dipend_combust_fossili",
    "preoccupa_interruz_disastri_nat",
    "preoccupa_interruz_produz_insuff",
    "preoccupa_interruz_guasti_tecnici",
    "preoccupa_interruz_attacc_terror",
];

pub const SUPPLY_WORRY_BUCKETS: BucketLabels = BucketLabels {
    low: "Small",
    middle: "Medium",
    high: "Large",
};

/// Column for perceived causes of climate change
pub const CLIMATE_CAUSE_COLUMN: &str = "cause_cambiamento_climatico";

pub const CLIMATE_CAUSE_BUCKETS: BucketLabels = BucketLabels {
    low: "Natural Processes",
    middle: "Equally",
    high: "Human Activity",
};

/// Column for overall worry about climate change
pub const CLIMATE_WORRY_COLUMN: &str = "preoccup_camb_clima";

pub const CLIMATE_WORRY_BUCKETS: BucketLabels = BucketLabels {
    low: "Not Worried",
    middle: "Somewhat worried",
    high: "Very worried",
};

/// Climate policy stance columns: fossil-fuel taxes, renewable
/// subsidies, inefficient-appliance bans
pub const POLICY_STANCE_COLUMNS: &[&str] = &[
    "posizione_increm_tasse_fossili",
    "posizione_sussidi_energ_rinn",
    "posizione_divieto_elettrodom_inef",
];

pub const POLICY_STANCE_BUCKETS: BucketLabels = BucketLabels {
    low: "In Favour",
    middle: "Neither",
    high: "Against",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_map_size() {
        assert_eq!(RENAME_MAP.len(), 32);
    }

    #[test]
    fn test_rename_map_spot_checks() {
        assert_eq!(RENAME_MAP["rdcenr"], "freq_azioni_risparmio_energ");
        assert_eq!(RENAME_MAP["wrpwrct"], "preoccupa_tagli_elettr");
        assert_eq!(RENAME_MAP["banhhap"], "posizione_divieto_elettrodom_inef");
    }

    #[test]
    fn test_label_map_sizes() {
        assert_eq!(SAVING_FREQUENCY_LABELS.len(), 6);
        assert_eq!(CLIMATE_BELIEF_LABELS.len(), 4);
        assert_eq!(THOUGHT_EXTENT_LABELS.len(), 5);
    }

    #[test]
    fn test_bucket_column_groups_are_renamed_names() {
        for name in ENERGY_SHARE_COLUMNS
            .iter()
            .chain(SUPPLY_WORRY_COLUMNS)
            .chain(POLICY_STANCE_COLUMNS)
        {
            assert!(
                RENAME_MAP.values().any(|renamed| renamed == name),
                "{} is not a renamed column",
                name
            );
        }
    }

    #[test]
    fn test_integer_columns_count() {
        assert_eq!(INTEGER_COLUMNS.len(), 17);
    }
}
