//! Test constructor attribute arguments error.

use modelbind::constructor;

pub struct Job;

impl Job {
    #[constructor(named)]
    pub fn new() -> Self {
        Job
    }
}

fn main() {}
