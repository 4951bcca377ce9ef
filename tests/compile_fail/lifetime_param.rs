//! Test lifetime parameter error.

use modelbind::Model;

#[derive(Model)]
pub struct Borrowed<'a> {
    pub name: &'a str,
}

fn main() {}
