//! Initial database migration.
//!
//! Creates all enums, tables, and indexes for the letter workflow,
//! discount codes, and subscriptions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: USERS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: LETTERS & STATUS HISTORY
        // ============================================================
        db.execute_unprepared(LETTERS_SQL).await?;
        db.execute_unprepared(LETTER_STATUS_HISTORY_SQL).await?;

        // ============================================================
        // PART 4: DISCOUNT CODES & SUBSCRIPTIONS
        // ============================================================
        db.execute_unprepared(DISCOUNT_CODES_SQL).await?;
        db.execute_unprepared(SUBSCRIPTIONS_SQL).await?;
        db.execute_unprepared(DISCOUNT_USAGES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Caller roles
CREATE TYPE user_role AS ENUM (
    'user',
    'employee',
    'admin'
);

-- Letter workflow status
CREATE TYPE letter_status AS ENUM (
    'draft',
    'submitted',
    'in_review',
    'approved',
    'completed',
    'cancelled'
);

-- Subscription status
CREATE TYPE subscription_status AS ENUM ('active', 'cancelled');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    full_name VARCHAR(255) NOT NULL,
    role user_role NOT NULL DEFAULT 'user',
    points INTEGER NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const LETTERS_SQL: &str = r"
CREATE TABLE letters (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id),
    title VARCHAR(255) NOT NULL,
    sender_name VARCHAR(255),
    sender_address TEXT,
    attorney_name VARCHAR(255),
    recipient_name VARCHAR(255),
    subject TEXT,
    desired_resolution TEXT,
    letter_type VARCHAR(100),
    ai_draft TEXT,
    status letter_status NOT NULL DEFAULT 'draft',
    assigned_reviewer_id UUID REFERENCES users(id),
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    sent_at TIMESTAMPTZ
);

CREATE INDEX idx_letters_user ON letters(user_id);
CREATE INDEX idx_letters_status ON letters(status);
";

const LETTER_STATUS_HISTORY_SQL: &str = r"
CREATE TABLE letter_status_history (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    letter_id UUID NOT NULL REFERENCES letters(id),
    previous_status letter_status NOT NULL,
    new_status letter_status NOT NULL,
    actor_id UUID NOT NULL REFERENCES users(id),
    note TEXT,
    forced BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_letter_status_history_letter ON letter_status_history(letter_id);
";

const DISCOUNT_CODES_SQL: &str = r"
CREATE TABLE discount_codes (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    code VARCHAR(64) NOT NULL UNIQUE,
    percentage NUMERIC(5, 2) NOT NULL CHECK (percentage >= 0 AND percentage <= 100),
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    usage_count INTEGER NOT NULL DEFAULT 0,
    employee_id UUID NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const SUBSCRIPTIONS_SQL: &str = r"
CREATE TABLE subscriptions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id),
    plan_type VARCHAR(100) NOT NULL,
    amount NUMERIC(12, 2) NOT NULL,
    discount_code_id UUID REFERENCES discount_codes(id),
    status subscription_status NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_subscriptions_user ON subscriptions(user_id);
";

const DISCOUNT_USAGES_SQL: &str = r"
CREATE TABLE discount_usages (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    discount_code_id UUID NOT NULL REFERENCES discount_codes(id),
    user_id UUID NOT NULL REFERENCES users(id),
    employee_id UUID NOT NULL REFERENCES users(id),
    original_amount NUMERIC(12, 2) NOT NULL,
    discount_amount NUMERIC(12, 2) NOT NULL,
    commission_amount NUMERIC(12, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_discount_usages_code ON discount_usages(discount_code_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS discount_usages;
DROP TABLE IF EXISTS subscriptions;
DROP TABLE IF EXISTS discount_codes;
DROP TABLE IF EXISTS letter_status_history;
DROP TABLE IF EXISTS letters;
DROP TABLE IF EXISTS users;
DROP TYPE IF EXISTS subscription_status;
DROP TYPE IF EXISTS letter_status;
DROP TYPE IF EXISTS user_role;
";
