//! Weakness derivation.

use std::sync::Arc;

use dexview_domain::{collect_weaknesses, ResourceRef};

use crate::entities::Records;
use crate::infrastructure::ports::FetchError;

/// Derive the types that deal double damage to any of a creature's types.
pub struct DeriveWeaknesses {
    records: Arc<Records>,
}

impl DeriveWeaknesses {
    pub fn new(records: Arc<Records>) -> Self {
        Self { records }
    }

    /// Deduplicated weaknesses in first-seen order across `types`.
    ///
    /// All type lookups resolve as one batch; any failure fails the whole
    /// derivation. No types means no requests and no weaknesses.
    pub async fn execute(&self, types: &[ResourceRef]) -> Result<Vec<String>, FetchError> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let urls: Vec<String> = types.iter().map(|t| t.url.clone()).collect();
        let relations = self.records.type_relations(&urls).await?;
        Ok(collect_weaknesses(&relations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockResourcePort, ResourceKind};
    use crate::test_fixtures::{type_json, FixturePort};

    fn type_ref(name: &str) -> ResourceRef {
        ResourceRef::new(name, FixturePort::type_url(name))
    }

    #[tokio::test]
    async fn test_shared_weakness_appears_once() {
        let port = FixturePort::new()
            .with_type(type_json("grass", &["fire", "ice", "poison", "flying", "bug"]))
            .with_type(type_json("poison", &["ground", "psychic"]))
            .with_type(type_json("bug", &["flying", "rock", "fire"]));
        let derive = DeriveWeaknesses::new(Arc::new(Records::new(Arc::new(port), 4)));

        let weaknesses = derive
            .execute(&[type_ref("grass"), type_ref("bug")])
            .await
            .expect("weaknesses");

        assert_eq!(
            weaknesses,
            vec!["fire", "ice", "poison", "flying", "bug", "rock"]
        );
    }

    #[tokio::test]
    async fn test_order_follows_input_types() {
        let port = FixturePort::new()
            .with_type(type_json("grass", &["fire", "ice", "poison", "flying", "bug"]))
            .with_type(type_json("poison", &["ground", "psychic"]));
        let derive = DeriveWeaknesses::new(Arc::new(Records::new(Arc::new(port), 4)));

        let weaknesses = derive
            .execute(&[type_ref("poison"), type_ref("grass")])
            .await
            .expect("weaknesses");

        assert_eq!(
            weaknesses,
            vec!["ground", "psychic", "fire", "ice", "poison", "flying", "bug"]
        );
    }

    #[tokio::test]
    async fn test_no_types_makes_no_requests() {
        let mut port = MockResourcePort::new();
        port.expect_fetch().never();
        let derive = DeriveWeaknesses::new(Arc::new(Records::new(Arc::new(port), 4)));

        assert!(derive.execute(&[]).await.expect("empty").is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_fails_derivation() {
        let port = FixturePort::new().with_type(type_json("fire", &["water"]));
        let derive = DeriveWeaknesses::new(Arc::new(Records::new(Arc::new(port), 4)));

        let err = derive
            .execute(&[type_ref("fire"), type_ref("stellar")])
            .await
            .expect_err("stellar is missing");

        assert!(err.is_not_found());
        assert_eq!(err.resource(), ResourceKind::Type);
    }
}
