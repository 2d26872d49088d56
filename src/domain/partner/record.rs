//! PartnerRecord - one past-relationship entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PartnerId, Timestamp, UserId};
use crate::domain::quiz::Archetype;

/// How long the relationship lasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    UnderThreeMonths,
    ThreeToTwelveMonths,
    OneToThreeYears,
    OverThreeYears,
}

impl DurationBucket {
    /// Returns the string representation for row storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::UnderThreeMonths => "under_three_months",
            DurationBucket::ThreeToTwelveMonths => "three_to_twelve_months",
            DurationBucket::OneToThreeYears => "one_to_three_years",
            DurationBucket::OverThreeYears => "over_three_years",
        }
    }
}

impl std::str::FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_three_months" => Ok(DurationBucket::UnderThreeMonths),
            "three_to_twelve_months" => Ok(DurationBucket::ThreeToTwelveMonths),
            "one_to_three_years" => Ok(DurationBucket::OneToThreeYears),
            "over_three_years" => Ok(DurationBucket::OverThreeYears),
            _ => Err(format!("Invalid duration bucket: {}", s)),
        }
    }
}

/// How the relationship ended, or whether it is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBucket {
    Amicable,
    Complicated,
    Painful,
    Ongoing,
}

impl OutcomeBucket {
    /// Returns the string representation for row storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeBucket::Amicable => "amicable",
            OutcomeBucket::Complicated => "complicated",
            OutcomeBucket::Painful => "painful",
            OutcomeBucket::Ongoing => "ongoing",
        }
    }
}

impl std::str::FromStr for OutcomeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amicable" => Ok(OutcomeBucket::Amicable),
            "complicated" => Ok(OutcomeBucket::Complicated),
            "painful" => Ok(OutcomeBucket::Painful),
            "ongoing" => Ok(OutcomeBucket::Ongoing),
            _ => Err(format!("Invalid outcome bucket: {}", s)),
        }
    }
}

/// One past-relationship entry, owned by the user who created it.
///
/// Mutated only through the explicit update methods; deleted explicitly by
/// id through the partner store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    id: PartnerId,
    user_id: UserId,
    archetype: Archetype,
    duration: DurationBucket,
    outcome: OutcomeBucket,
    notes: String,
    created_at: Timestamp,
}

impl PartnerRecord {
    /// Creates a new record owned by the given user.
    pub fn new(
        user_id: UserId,
        archetype: Archetype,
        duration: DurationBucket,
        outcome: OutcomeBucket,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: PartnerId::new(),
            user_id,
            archetype,
            duration,
            outcome,
            notes: notes.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a record from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: PartnerId,
        user_id: UserId,
        archetype: Archetype,
        duration: DurationBucket,
        outcome: OutcomeBucket,
        notes: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            archetype,
            duration,
            outcome,
            notes,
            created_at,
        }
    }

    pub fn id(&self) -> PartnerId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn duration(&self) -> DurationBucket {
        self.duration
    }

    pub fn outcome(&self) -> OutcomeBucket {
        self.outcome
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Replaces the classified archetype.
    pub fn set_archetype(&mut self, archetype: Archetype) {
        self.archetype = archetype;
    }

    /// Replaces the duration and outcome buckets.
    pub fn set_buckets(&mut self, duration: DurationBucket, outcome: OutcomeBucket) {
        self.duration = duration;
        self.outcome = outcome;
    }

    /// Replaces the free-text notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> PartnerRecord {
        PartnerRecord::new(
            UserId::new("user-1").unwrap(),
            Archetype::Chocolate,
            DurationBucket::OneToThreeYears,
            OutcomeBucket::Amicable,
            "met at a gig",
        )
    }

    #[test]
    fn new_record_assigns_id_and_timestamp() {
        let record = test_record();
        assert_eq!(record.archetype(), Archetype::Chocolate);
        assert_eq!(record.notes(), "met at a gig");
        assert_ne!(test_record().id(), record.id());
    }

    #[test]
    fn update_methods_replace_fields() {
        let mut record = test_record();
        record.set_archetype(Archetype::Mint);
        record.set_buckets(DurationBucket::UnderThreeMonths, OutcomeBucket::Painful);
        record.set_notes("revised");

        assert_eq!(record.archetype(), Archetype::Mint);
        assert_eq!(record.duration(), DurationBucket::UnderThreeMonths);
        assert_eq!(record.outcome(), OutcomeBucket::Painful);
        assert_eq!(record.notes(), "revised");
    }

    #[test]
    fn duration_bucket_roundtrips_through_str() {
        for bucket in [
            DurationBucket::UnderThreeMonths,
            DurationBucket::ThreeToTwelveMonths,
            DurationBucket::OneToThreeYears,
            DurationBucket::OverThreeYears,
        ] {
            let parsed: DurationBucket = bucket.as_str().parse().unwrap();
            assert_eq!(parsed, bucket);
        }
        assert!("forever".parse::<DurationBucket>().is_err());
    }

    #[test]
    fn outcome_bucket_roundtrips_through_str() {
        for bucket in [
            OutcomeBucket::Amicable,
            OutcomeBucket::Complicated,
            OutcomeBucket::Painful,
            OutcomeBucket::Ongoing,
        ] {
            let parsed: OutcomeBucket = bucket.as_str().parse().unwrap();
            assert_eq!(parsed, bucket);
        }
    }
}
