//! Demo catalog fixtures.
//!
//! The seed mirrors the historical data set. Store aggregates keep
//! their recorded values and are not recomputed from the seeded
//! ratings at load; a submission recomputes the touched store's
//! aggregate from its rating set.

use catalog_store::MemoryCatalogStore;
use chrono::{DateTime, TimeZone, Utc};
use entities::{Rating, Store, User, UserRecord, UserRole};
use session::password;

/// Builds the demo catalog.
pub fn demo_catalog() -> MemoryCatalogStore {
    MemoryCatalogStore::new()
        .with_users(demo_users())
        .with_stores(demo_stores())
        .with_ratings(demo_ratings())
}

fn demo_users() -> Vec<UserRecord> {
    let roster = [
        ("1", "Admin User", "admin@example.com", "Admin@123", UserRole::Admin),
        ("2", "Normal User", "user@example.com", "User@123", UserRole::User),
        ("3", "Store Owner", "store@example.com", "Store@123", UserRole::StoreOwner),
        ("4", "John Doe", "john@example.com", "John@123", UserRole::User),
        ("5", "Jane Smith", "jane@example.com", "Jane@123", UserRole::StoreOwner),
        ("6", "Alex Johnson", "alex@example.com", "Alex@123", UserRole::StoreOwner),
    ];
    roster
        .into_iter()
        .map(|(id, name, email, pw, role)| {
            UserRecord::new(User::new(id, name, email, role), password::hash_password(pw))
        })
        .collect()
}

fn demo_stores() -> Vec<Store> {
    vec![
        Store::new("1", "Coffee Shop Downtown", "123 Main St, Downtown")
            .with_owner("3")
            .with_aggregate(4.5, 28),
        Store::new("2", "Bookstore Haven", "456 Oak Ave, Midtown")
            .with_owner("5")
            .with_aggregate(4.8, 52),
        Store::new("3", "Tech Gadgets", "789 Pine Rd, Uptown")
            .with_owner("6")
            .with_aggregate(4.2, 35),
        Store::new("4", "Fashion Boutique", "321 Elm St, West End")
            .with_owner("6")
            .with_aggregate(3.9, 19),
        Store::new("5", "Gourmet Grocery", "654 Maple Dr, East Side")
            .with_owner("3")
            .with_aggregate(4.7, 41),
        Store::new("6", "Fitness Center", "987 Cedar Lane, North Side").with_aggregate(4.4, 33),
        Store::new("7", "Home Decor Store", "753 Birch Blvd, South End").with_aggregate(4.1, 25),
        Store::new("8", "Pet Supply Shop", "159 Willow Way, Riverside").with_aggregate(4.6, 37),
    ]
}

fn demo_ratings() -> Vec<Rating> {
    let fixtures = [
        ("1", "1", "2", 4, (2023, 5, 15)),
        ("2", "3", "2", 3, (2023, 6, 22)),
        ("3", "1", "4", 4, (2023, 7, 15)),
        ("4", "1", "5", 5, (2023, 8, 1)),
        ("5", "1", "6", 4, (2023, 8, 5)),
        ("6", "5", "4", 5, (2023, 7, 1)),
        ("7", "5", "5", 4, (2023, 7, 20)),
        ("8", "5", "6", 5, (2023, 7, 25)),
    ];
    fixtures
        .into_iter()
        .map(|(id, store_id, user_id, value, date)| Rating {
            id: id.to_string(),
            store_id: store_id.to_string(),
            user_id: user_id.to_string(),
            value,
            submitted_at: noon(date),
        })
        .collect()
}

fn noon((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}
