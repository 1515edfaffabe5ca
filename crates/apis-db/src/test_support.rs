//! Shared test utilities for apis-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use apis_core::entities::{Apiary, Hive, User};
    use apis_core::enums::ApiaryStatus;
    use apis_core::inputs::{NewApiary, NewHive};

    use crate::ApisDb;
    use crate::service::ApisService;

    /// Create an in-memory ApisService.
    pub async fn test_service() -> ApisService {
        let db = ApisDb::open_local(":memory:").await.unwrap();
        ApisService::from_db(db)
    }

    pub async fn test_user(svc: &ApisService) -> User {
        svc.ensure_user("keeper@example.invalid", Some("Keeper"))
            .await
            .unwrap()
    }

    pub async fn test_apiary(svc: &ApisService) -> Apiary {
        svc.create_apiary(&NewApiary {
            name: "Home yard".into(),
            location: "Back garden".into(),
            latitude: None,
            longitude: None,
            status: ApiaryStatus::Healthy,
        })
        .await
        .unwrap()
    }

    pub async fn test_hive(svc: &ApisService, apiary_id: &str, name: &str) -> Hive {
        svc.create_hive(&NewHive::named(name, apiary_id))
            .await
            .unwrap()
    }
}
