//! Database seeder for Lexflow development and testing.
//!
//! Seeds an admin, an employee with a referral discount code, and a
//! regular user for local development and testing purposes.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use lexflow_db::entities::{discount_codes, sea_orm_active_enums::UserRole, users};

/// Demo admin ID (consistent for all seeds)
const ADMIN_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo employee ID (consistent for all seeds)
const EMPLOYEE_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Demo user ID (consistent for all seeds)
const USER_ID: &str = "00000000-0000-0000-0000-000000000003";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = lexflow_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding accounts...");
    seed_user(&db, ADMIN_ID, "admin@lexflow.test", "Demo Admin", UserRole::Admin).await;
    seed_user(
        &db,
        EMPLOYEE_ID,
        "reviewer@lexflow.test",
        "Demo Reviewer",
        UserRole::Employee,
    )
    .await;
    seed_user(&db, USER_ID, "user@lexflow.test", "Demo User", UserRole::User).await;

    println!("Seeding discount code...");
    seed_discount_code(&db).await;

    println!("Seeding complete!");
}

fn parse_id(id: &str) -> Uuid {
    Uuid::parse_str(id).expect("seed IDs are valid UUIDs")
}

/// Seeds one account, skipping it when the email is already taken.
async fn seed_user(db: &DatabaseConnection, id: &str, email: &str, name: &str, role: UserRole) {
    if users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  {email} already exists, skipping...");
        return;
    }

    let now = Utc::now().into();
    let user = users::ActiveModel {
        id: Set(parse_id(id)),
        email: Set(email.to_string()),
        full_name: Set(name.to_string()),
        role: Set(role),
        points: Set(0),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    if let Err(e) = user.insert(db).await {
        eprintln!("Failed to insert {email}: {e}");
    } else {
        println!("  Created {email}");
    }
}

/// Seeds the SAVE20 referral code owned by the demo employee.
async fn seed_discount_code(db: &DatabaseConnection) {
    if discount_codes::Entity::find()
        .filter(discount_codes::Column::Code.eq("SAVE20"))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  SAVE20 already exists, skipping...");
        return;
    }

    let code = discount_codes::ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set("SAVE20".to_string()),
        percentage: Set(Decimal::from(20)),
        is_active: Set(true),
        usage_count: Set(0),
        employee_id: Set(parse_id(EMPLOYEE_ID)),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = code.insert(db).await {
        eprintln!("Failed to insert SAVE20: {e}");
    } else {
        println!("  Created discount code SAVE20 (20%)");
    }
}
