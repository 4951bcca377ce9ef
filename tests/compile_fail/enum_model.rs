//! Test enum error.

use modelbind::Model;

#[derive(Model)]
pub enum Mode {
    Fast,
    Safe,
}

fn main() {}
