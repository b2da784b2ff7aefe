use uom::si::{
    f64::{Pressure, Time, Volume},
    pressure::{millimeter_of_mercury, pascal},
    time::second,
    volume::{cubic_meter, milliliter},
};

use super::{Elastance, HydraulicResistance};

/// One dyn·s/cm⁵ expressed in Pa·s/m³.
const PA_S_PER_M3_PER_DYN_S_PER_CM5: f64 = 1.0e5;

/// Conversion between a quantity and the clinical unit it is usually quoted in.
///
/// - [`Elastance`]: mmHg/mL
/// - [`HydraulicResistance`]: dyn·s/cm⁵
pub trait Clinical: Sized {
    /// Constructs the quantity from a value in clinical units.
    fn from_clinical(value: f64) -> Self;

    /// Returns the quantity's value in clinical units.
    fn to_clinical(self) -> f64;
}

impl Clinical for Elastance {
    fn from_clinical(value: f64) -> Self {
        Pressure::new::<millimeter_of_mercury>(value) / Volume::new::<milliliter>(1.0)
    }

    fn to_clinical(self) -> f64 {
        let pressure: Pressure = self * Volume::new::<milliliter>(1.0);
        pressure.get::<millimeter_of_mercury>()
    }
}

impl Clinical for HydraulicResistance {
    fn from_clinical(value: f64) -> Self {
        Pressure::new::<pascal>(value * PA_S_PER_M3_PER_DYN_S_PER_CM5) * Time::new::<second>(1.0)
            / Volume::new::<cubic_meter>(1.0)
    }

    fn to_clinical(self) -> f64 {
        let pressure: Pressure =
            self * Volume::new::<cubic_meter>(1.0) / Time::new::<second>(1.0);
        pressure.get::<pascal>() / PA_S_PER_M3_PER_DYN_S_PER_CM5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::VolumeRate, volume_rate::liter_per_minute};

    #[test]
    fn elastance_roundtrip() {
        let ea = Elastance::from_clinical(1.2);
        assert_relative_eq!(ea.to_clinical(), 1.2, max_relative = 1e-12);
    }

    #[test]
    fn elastance_si_value() {
        // 1 mmHg/mL = 133.322... Pa / 1e-6 m³
        let ees = Elastance::from_clinical(1.0);
        assert_relative_eq!(ees.value, 1.333_224e8, max_relative = 1e-6);
    }

    #[test]
    fn resistance_roundtrip() {
        let svr = HydraulicResistance::from_clinical(1200.0);
        assert_relative_eq!(svr.to_clinical(), 1200.0, max_relative = 1e-12);
    }

    #[test]
    fn wood_unit_conversion_is_close_to_eighty() {
        // MAP [mmHg] ≈ CO [L/min] · SVR [dyn·s/cm⁵] / 80
        let svr = HydraulicResistance::from_clinical(800.0);
        let co = VolumeRate::new::<liter_per_minute>(5.0);
        let map: Pressure = co * svr;
        assert_relative_eq!(
            map.get::<millimeter_of_mercury>(),
            5.0 * 800.0 / 80.0,
            max_relative = 1e-3
        );
    }
}
