//! End-to-end tests that run the analysis against real files.

#[cfg(test)]
mod analysis;
