#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of unit values
///macro to create a Length in meter
#[macro_export]
macro_rules! meter {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::meter};
        Length::new::<meter>($val)
    }};
}
///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::millimeter};
        Length::new::<millimeter>($val)
    }};
}
///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::micrometer};
        Length::new::<micrometer>($val)
    }};
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($val:expr) => {{
        use uom::si::{f64::Length, length::nanometer};
        Length::new::<nanometer>($val)
    }};
}
///macro to create an Angle in radian
#[macro_export]
macro_rules! radian {
    ($val:expr) => {{
        use uom::si::{angle::radian, f64::Angle};
        Angle::new::<radian>($val)
    }};
}
///macro to create an Angle in milliradian
#[macro_export]
macro_rules! milliradian {
    ($val:expr) => {{
        use uom::si::{angle::radian, f64::Angle};
        Angle::new::<radian>(1e-3 * $val)
    }};
}
///macro to create an Angle in degree
#[macro_export]
macro_rules! degree {
    ($val:expr) => {{
        use uom::si::{angle::degree, f64::Angle};
        Angle::new::<degree>($val)
    }};
}
