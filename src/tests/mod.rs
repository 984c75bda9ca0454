// Test modules for historical-events-api
//
// Each source area has a corresponding test file that focuses on
// behaviour visible to callers rather than implementation details.

pub mod error;
