use super::*;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn make_item(id: u64, name: &str, category: &str, price: f64) -> CatalogItem {
        CatalogItem::new(
            ItemId::new(id),
            ItemName::try_new(name).unwrap(),
            Category::try_new(category).unwrap(),
            Price::try_new(price).unwrap(),
        )
    }

    pub(super) const TWO_PRODUCTS: &str = r#"{
        "products": [
            { "id": 1, "name": "Milwaukee M18 Drill", "category": "Power Tools", "thumbnail": "drill.png", "price": 199.0 },
            { "id": 2, "name": "Stanley Claw Hammer", "category": "Hand Tools", "thumbnail": "hammer.png", "price": 24.5 }
        ]
    }"#;
}

mod from_items {
    use super::common::make_item;
    use super::*;

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::from_items(vec![
            make_item(3, "Level", "Hand Tools", 10.0),
            make_item(1, "Drill", "Power Tools", 99.0),
        ])
        .unwrap();

        let ids: Vec<u64> = catalog.iter().map(|item| item.id.into_inner()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = Catalog::from_items(vec![
            make_item(1, "Drill", "Power Tools", 99.0),
            make_item(1, "Saw", "Power Tools", 89.0),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(id) if id == ItemId::new(1)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_items(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}

mod from_json {
    use super::common::TWO_PRODUCTS;
    use super::*;

    #[test]
    fn test_parses_products_and_ignores_thumbnail() {
        let catalog = Catalog::from_json(TWO_PRODUCTS).unwrap();

        assert_eq!(catalog.len(), 2);
        let drill = catalog.get(ItemId::new(1)).unwrap();
        assert_eq!(drill.name.as_str(), "Milwaukee M18 Drill");
        assert_eq!(drill.category.as_str(), "Power Tools");
        assert_eq!(drill.price.into_inner(), 199.0);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let json = r#"{ "products": [ { "id": 1, "name": "Drill", "price": 1.0 } ] }"#;

        let err = Catalog::from_json(json).unwrap_err();

        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_blank_name_reports_index() {
        let json = r#"{ "products": [
            { "id": 1, "name": "Drill", "category": "Power Tools", "price": 1.0 },
            { "id": 2, "name": "   ", "category": "Power Tools", "price": 1.0 }
        ] }"#;

        let err = Catalog::from_json(json).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidItem { index: 1, .. }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{ "products": [
            { "id": 1, "name": "Drill", "category": "Power Tools", "price": -5.0 }
        ] }"#;

        let err = Catalog::from_json(json).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidItem { index: 0, .. }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{ "products": [
            { "id": 4, "name": "Drill", "category": "Power Tools", "price": 1.0 },
            { "id": 4, "name": "Saw", "category": "Power Tools", "price": 2.0 }
        ] }"#;

        let err = Catalog::from_json(json).unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(_)));
    }
}

mod load {
    use super::common::TWO_PRODUCTS;
    use super::*;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products.json");
        std::fs::write(&path, TWO_PRODUCTS).unwrap();

        let catalog = Catalog::load(&path).unwrap();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();

        let err = Catalog::load(&temp.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, CatalogError::Io(_)));
    }
}
