//! Conditional attribute resolution for household members.
//!
//! Caste, ancestral language, mother tongue and religion are asked once for
//! the family (`family_history_info`) and once per member
//! (`individual_history_info`). When the household answers that its
//! members form one family (`id.are_a_family = yes`), every member takes
//! the family values and member-level answers are ignored. Otherwise each
//! member's own answers are used.

use census_model::choice::tables;
use census_model::{FieldError, HouseholdRecord, IndividualRecord, RawRecord};
use census_transform::Decoder;

/// Decoded caste, language and religion answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Demographics {
    pub caste: Option<String>,
    pub caste_other: Option<String>,
    pub ancestral_language: Option<String>,
    pub ancestral_language_other: Option<String>,
    pub mother_tongue_primary: Option<String>,
    pub mother_tongue_primary_other: Option<String>,
    pub religion: Option<String>,
    pub religion_other: Option<String>,
}

impl Demographics {
    /// Read a `*_history_info` sub-form.
    pub fn from_history(raw: RawRecord<'_>, decoder: &Decoder<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            caste: decoder.choice(tables::CASTE, raw.text("caste")?),
            caste_other: raw.text("caste_other")?,
            ancestral_language: decoder.choice(tables::LANGUAGE, raw.text("ancestrial_lang")?),
            ancestral_language_other: raw.text("ancestrial_lang_other")?,
            mother_tongue_primary: decoder
                .choice(tables::LANGUAGE, raw.text("mother_tounge_primary")?),
            mother_tongue_primary_other: raw.text("mother_tounge_primary_other")?,
            religion: decoder.choice(tables::RELIGION, raw.text("religion")?),
            religion_other: raw.text("religion_other")?,
        })
    }

    pub fn apply_to_household(self, record: &mut HouseholdRecord) {
        record.caste = self.caste;
        record.caste_other = self.caste_other;
        record.ancestral_language = self.ancestral_language;
        record.ancestral_language_other = self.ancestral_language_other;
        record.mother_tongue_primary = self.mother_tongue_primary;
        record.mother_tongue_primary_other = self.mother_tongue_primary_other;
        record.religion = self.religion;
        record.religion_other = self.religion_other;
    }

    pub fn apply_to_individual(self, record: &mut IndividualRecord) {
        record.caste = self.caste;
        record.caste_other = self.caste_other;
        record.ancestral_language = self.ancestral_language;
        record.ancestral_language_other = self.ancestral_language_other;
        record.mother_tongue_primary = self.mother_tongue_primary;
        record.mother_tongue_primary_other = self.mother_tongue_primary_other;
        record.religion = self.religion;
        record.religion_other = self.religion_other;
    }
}

/// Where members' demographic attributes come from, decided once per
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemographicSource {
    /// Every member carries the family values.
    Inherited(Demographics),
    /// Each member's `individual_history_info` supplies its own values.
    PerIndividual,
}

impl DemographicSource {
    pub fn new(are_a_family: Option<bool>, family: &Demographics) -> Self {
        if are_a_family == Some(true) {
            Self::Inherited(family.clone())
        } else {
            Self::PerIndividual
        }
    }

    /// Attributes for one member element.
    pub fn resolve(
        &self,
        individual: RawRecord<'_>,
        decoder: &Decoder<'_>,
    ) -> Result<Demographics, FieldError> {
        match self {
            Self::Inherited(family) => Ok(family.clone()),
            Self::PerIndividual => {
                Demographics::from_history(individual.section("individual_history_info")?, decoder)
            }
        }
    }
}
