use super::{Conditions, HeartRate, heart_rate};

pub(super) fn conditions(svr: f64, ef: f64) -> Conditions {
    Conditions::new(svr, ef).expect("test conditions should be valid")
}

pub(super) fn hr(bpm: f64) -> HeartRate {
    heart_rate(bpm).expect("test heart rate should be valid")
}
