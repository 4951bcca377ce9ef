//! Test constructor self receiver error.

use modelbind::constructor;

pub struct Job;

impl Job {
    #[constructor]
    pub fn rebuild(&self) -> Self {
        Job
    }
}

fn main() {}
