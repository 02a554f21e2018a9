//! NetCDF fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const N_TIME: usize = 3;
pub const N_LAT: usize = 4;
pub const N_LON: usize = 5;

pub const AQI: &str = "index_of_airquality_194";
pub const TIME_UNITS: &str = "hours since 2020-01-01T00:00:00Z";

pub const LATS: [f32; N_LAT] = [60.0, 60.125, 60.25, 60.375];
pub const LONS: [f32; N_LON] = [24.5, 24.75, 25.0, 25.25, 25.5];
pub const HOURS: [i32; N_TIME] = [0, 6, 12];

/// Value stored in the AQI grid at one point.
pub fn aqi_at(t: usize, y: usize, x: usize) -> f32 {
    (t * 100 + y * 10 + x) as f32 + 0.5
}

/// A fixture file that lives as long as its temporary directory.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Grid fixture with the standard time units.
pub fn grid_fixture() -> Fixture {
    grid_fixture_with_units(TIME_UNITS)
}

/// Grid fixture whose time variable carries `time_units`.
pub fn grid_fixture_with_units(time_units: &str) -> Fixture {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("grid.nc");
    write_grid(&path, time_units).expect("write fixture");
    Fixture { _dir: dir, path }
}

fn write_grid(path: &Path, time_units: &str) -> Result<(), netcdf::Error> {
    let mut file = netcdf::create(path)?;

    file.add_attribute("title", "ncgrid test grid")?;

    file.add_dimension("time", N_TIME)?;
    file.add_dimension("lat", N_LAT)?;
    file.add_dimension("lon", N_LON)?;

    {
        let mut time_var = file.add_variable::<i32>("time", &["time"])?;
        time_var.put_attribute("units", time_units)?;
        time_var.put_attribute("long_name", "time")?;
        time_var.put_values(&HOURS, ..)?;
    }

    {
        let mut lat_var = file.add_variable::<f32>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&LATS, ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&LONS, ..)?;
    }

    {
        let mut aqi_var = file.add_variable::<f32>(AQI, &["time", "lat", "lon"])?;
        aqi_var.put_attribute("units", "1")?;
        aqi_var.put_attribute("long_name", "air quality index")?;

        let mut values = Vec::with_capacity(N_TIME * N_LAT * N_LON);
        for t in 0..N_TIME {
            for y in 0..N_LAT {
                for x in 0..N_LON {
                    values.push(aqi_at(t, y, x));
                }
            }
        }
        aqi_var.put_values(&values, ..)?;
    }

    {
        let mut elevation = file.add_variable::<i16>("elevation", &["lat", "lon"])?;
        elevation.put_attribute("units", "m")?;
        let values: Vec<i16> = (0..(N_LAT * N_LON) as i16).map(|i| i * 3).collect();
        elevation.put_values(&values, ..)?;
    }

    {
        let mut flags = file.add_variable::<u8>("flags", &["lat"])?;
        flags.put_values(&[1u8, 0, 1, 1], ..)?;
    }

    Ok(())
}
