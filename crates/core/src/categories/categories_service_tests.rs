#[cfg(test)]
mod tests {
    use crate::categories::{CategoryService, CategoryServiceTrait, NewCategory, Supercategory};
    use crate::errors::Error;
    use crate::testing::{InMemoryDb, OTHER_USER, USER};
    use std::sync::Arc;

    fn names(service: &CategoryService, user_id: &str) -> Vec<String> {
        service
            .get_categories(user_id)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[tokio::test]
    async fn test_categories_sorted_by_supercategory_then_name() {
        let db = Arc::new(InMemoryDb::new());
        let service = CategoryService::new(db.clone());
        db.add_category(USER, "Books", Supercategory::Wants);
        db.add_category(OTHER_USER, "Boat", Supercategory::Wants);

        assert_eq!(
            names(&service, USER),
            vec![
                "Groceries",
                "Rent",
                "Books",
                "Restaurants",
                "Subscriptions",
                "Misc"
            ]
        );
        assert_eq!(
            service.get_misc_category_id().unwrap().as_deref(),
            Some("cat-misc")
        );
    }

    #[tokio::test]
    async fn test_create_category() {
        let db = Arc::new(InMemoryDb::new());
        let service = CategoryService::new(db.clone());

        let created = service
            .create_category(
                USER,
                NewCategory {
                    name: "  Pets ".into(),
                    supercategory: Supercategory::Needs,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.name, "Pets");
        assert_eq!(created.user_id.as_deref(), Some(USER));

        let err = service
            .create_category(
                USER,
                NewCategory {
                    name: "rent".into(),
                    supercategory: Supercategory::Needs,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(err.to_string(), "You already have a category with this name.");

        let err = service
            .create_category(
                USER,
                NewCategory {
                    name: " ".into(),
                    supercategory: Supercategory::Wants,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Category name is required.");
    }

    #[tokio::test]
    async fn test_hide_and_unhide_category() {
        let db = Arc::new(InMemoryDb::new());
        let service = CategoryService::new(db.clone());

        service.hide_category(USER, "cat-rent").await.unwrap();
        assert!(!names(&service, USER).contains(&"Rent".to_string()));
        assert!(names(&service, OTHER_USER).contains(&"Rent".to_string()));

        service.unhide_category(USER, "cat-rent").await.unwrap();
        assert!(names(&service, USER).contains(&"Rent".to_string()));
    }

    #[tokio::test]
    async fn test_misc_and_foreign_categories_cannot_be_hidden() {
        let db = Arc::new(InMemoryDb::new());
        let service = CategoryService::new(db.clone());
        let foreign = db.add_category(OTHER_USER, "Boat", Supercategory::Wants);

        let err = service.hide_category(USER, "cat-misc").await.unwrap_err();
        assert_eq!(err.to_string(), "The Misc category cannot be hidden.");

        let err = service.hide_category(USER, &foreign.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
