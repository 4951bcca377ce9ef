//! Test unknown field attribute error.

use modelbind::Model;

#[derive(Model)]
pub struct Job {
    #[model(hidden)]
    pub id: u32,
}

fn main() {}
