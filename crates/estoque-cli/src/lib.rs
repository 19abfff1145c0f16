//! # Estoque CLI
//!
//! Administrative tooling that has to work before any administrator
//! exists, plus the sample data the screens were designed around.
//!
//! ```ignore
//! use estoque_cli::{admin::create_admin, seeder::seed_sample_data};
//!
//! let user_id = create_admin(&pool, None, "ti@empresa.com", Some("Equipe TI")).await?;
//! let summary = seed_sample_data(&pool).await?;
//! ```

pub mod admin;
pub mod seeder;
