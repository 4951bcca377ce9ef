//! Test unknown type attribute error.

use modelbind::Model;

#[derive(Model)]
#[model(rename)]
pub struct Job {
    pub id: u32,
}

fn main() {}
