//! Test generic constructor error.

use modelbind::constructor;

pub struct Job;

impl Job {
    #[constructor]
    pub fn make<T>() -> Self {
        Job
    }
}

fn main() {}
