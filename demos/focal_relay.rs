use qprop::{
    error::QpResult, micrometer, millimeter, GaussianBeam, OpticalSystem,
};
use uom::si::length::micrometer as um;

fn main() -> QpResult<()> {
    env_logger::init();
    // 1064 nm beam with a 1 mm waist, focussed by an f-f relay (f = 118 mm)
    let beam = GaussianBeam::new(micrometer!(1.064), millimeter!(1.0))?;
    let mut system = OpticalSystem::new();
    system.add_free_space(millimeter!(118.0))?;
    system.add_thin_lens(millimeter!(118.0))?;
    system.add_free_space(millimeter!(118.0))?;
    let result = system.propagate(&beam)?;
    println!("input waist:     {:.2} um", beam.waist().get::<um>());
    println!("focussed waist:  {:.2} um", result.waist().get::<um>());
    println!("spot size:       {:.2} um", result.spot_size().get::<um>());
    println!("waist position:  {:.2} um", result.position().get::<um>());
    println!(
        "divergence:      {:.2} mrad",
        1e3 * result.divergence().get::<uom::si::angle::radian>()
    );
    Ok(())
}
