// Introductory problems module
// Add problem modules here as they are implemented

pub mod bit_strings;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("introductory").add("bit_strings", bit_strings::solve)
}
