//! Test duplicate constructor error.

use modelbind::Model;

#[derive(Model)]
#[model(constructors(new, new))]
pub struct Job {
    pub id: u32,
}

fn main() {}
