use lodgebook_core::{Apartment, Client, Hotel, ValidationError};

#[test]
fn hotel_with_valid_data_exposes_all_fields() {
    let hotel = Hotel::new(1, "Main Street 123", 75.50, 4).unwrap();
    assert_eq!(hotel.id(), 1);
    assert_eq!(hotel.address(), "Main Street 123");
    assert_eq!(hotel.price_per_night(), 75.50);
    assert_eq!(hotel.stars(), 4);
}

#[test]
fn invalid_fields_are_rejected_before_any_entity_exists() {
    let cases: Vec<(Result<Hotel, ValidationError>, &str)> = vec![
        (Hotel::new(0, "Main Street 1", 50.0, 3), "id"),
        (Hotel::new(1, "   ", 50.0, 3), "address"),
        (Hotel::new(1, "Main Street 1", -10.0, 3), "price_per_night"),
        (Hotel::new(1, "Main Street 1", 50.0, 0), "stars"),
        (Hotel::new(1, "Main Street 1", 50.0, 6), "stars"),
    ];
    for (result, field) in cases {
        assert_eq!(result.unwrap_err().field, field);
    }
    assert_eq!(
        Apartment::new(1, "Dock Road 2", 40.0, 0, false)
            .unwrap_err()
            .field,
        "rooms"
    );
}

#[test]
fn setters_enforce_the_same_invariants_as_constructors() {
    let mut hotel = Hotel::new(1, "Main Street 1", 50.0, 3).unwrap();
    assert!(hotel.set_price_per_night(-1.0).is_err());
    assert!(hotel.set_address("  ").is_err());
    assert!(hotel.set_stars(7).is_err());
    // Failed mutation leaves prior state intact.
    assert_eq!(hotel.price_per_night(), 50.0);
    assert_eq!(hotel.stars(), 3);

    hotel.set_price_per_night(65.0).unwrap();
    hotel.set_stars(5).unwrap();
    assert_eq!(hotel.price_per_night(), 65.0);
    assert_eq!(hotel.classification(), "Luxury");
}

#[test]
fn classification_is_pure_in_stars() {
    let expected = [
        (1, "Standard"),
        (2, "Standard"),
        (3, "Comfort"),
        (4, "Superior"),
        (5, "Luxury"),
    ];
    for (stars, label) in expected {
        let hotel = Hotel::new(1, "Main Street 1", 50.0, stars).unwrap();
        assert_eq!(hotel.classification(), label);
    }
}

#[test]
fn hotel_service_fee_is_ten_percent() {
    let hotel = Hotel::new(1, "Main Street 1", 200.0, 4).unwrap();
    assert_eq!(hotel.service_fee(), 20.0);
}

#[test]
fn garage_fee_difference_is_exactly_five() {
    let garaged = Apartment::new(1, "Dock Road 2", 120.0, 3, true).unwrap();
    let plain = Apartment::new(2, "Dock Road 2", 120.0, 3, false).unwrap();
    assert_eq!(garaged.service_fee() - plain.service_fee(), 5.0);
    assert_eq!(plain.service_fee(), 12.0);
}

#[test]
fn client_name_shorter_than_three_after_trim_is_rejected() {
    assert_eq!(
        Client::new(1, "  ab ", "ana@mail.pt", "").unwrap_err().field,
        "name"
    );
    assert!(Client::new(1, "Ana", "ana@mail.pt", "").is_ok());
}

#[test]
fn client_email_format_is_enforced() {
    for bad in ["no-at.pt", "two@@ats.pt", "a@b@c.pt", "no@dotafter", "with space@mail.pt"] {
        assert_eq!(Client::new(1, "Ana Santos", bad, "").unwrap_err().field, "email");
    }
}

#[test]
fn client_phone_is_digit_filtered_or_empty() {
    let with_phone = Client::new(1, "Ana Santos", "ana@mail.pt", "+351 912 345 678").unwrap();
    assert_eq!(with_phone.phone(), "351912345678");

    let without = Client::new(2, "Rui Costa", "rui@mail.pt", "   ").unwrap();
    assert_eq!(without.phone(), "");

    assert_eq!(
        Client::new(3, "Eva Luz", "eva@mail.pt", "12-34")
            .unwrap_err()
            .field,
        "phone"
    );
}

#[test]
fn describe_and_display_render_entity_details() {
    let hotel = Hotel::new(7, "Harbor View 9", 90.0, 5).unwrap();
    let details = hotel.describe();
    assert!(details.contains("Luxury"));
    assert!(details.contains("Harbor View 9"));
    assert!(hotel.to_string().contains("[7]"));

    let client = Client::new(3, "Ana Santos", "ana@mail.pt", "").unwrap();
    assert!(client.describe().contains("not provided"));
    assert_eq!(client.to_string(), "[3] Ana Santos - ana@mail.pt");
}
