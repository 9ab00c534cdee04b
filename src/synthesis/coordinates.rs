//! Coastline coordinates: an evenly spaced longitude axis and a sinusoidal,
//! slightly noisy latitude trace.

use rand::Rng;
use std::f64::consts::PI;

use super::{gaussian_noise, SynthesisError};
use crate::processing::linspace;

/// Western end of the coastline (degrees)
pub const LON_MIN: f64 = 3.0;
/// Eastern end of the coastline (degrees)
pub const LON_MAX: f64 = 6.5;
/// Mean latitude of the shoreline trace (degrees)
const BASE_LATITUDE: f64 = 4.55;
/// Amplitude of the latitude sinusoid (degrees)
const LATITUDE_AMPLITUDE: f64 = 0.15;
/// Half-period of the latitude sinusoid, in degrees of longitude
const LATITUDE_HALF_PERIOD: f64 = 1.5;
/// Latitude jitter (degrees, 1 sigma)
const LATITUDE_NOISE_SD: f64 = 0.005;

/// Ordered coastline samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Coastline {
    pub longitude: Vec<f64>,
    pub latitude: Vec<f64>,
}

impl Coastline {
    pub fn len(&self) -> usize {
        self.longitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitude.is_empty()
    }
}

/// Latitude of the smooth shoreline curve at `lon`, before noise.
pub fn base_latitude(lon: f64) -> f64 {
    BASE_LATITUDE + LATITUDE_AMPLITUDE * ((lon - LON_MIN) * PI / LATITUDE_HALF_PERIOD).sin()
}

/// Generate `n` coastline samples between [`LON_MIN`] and [`LON_MAX`].
pub fn generate_coastline<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<Coastline, SynthesisError> {
    let longitude = linspace(LON_MIN, LON_MAX, n);
    let noise = gaussian_noise(rng, LATITUDE_NOISE_SD, n)?;

    let latitude = longitude
        .iter()
        .zip(&noise)
        .map(|(&lon, &eps)| base_latitude(lon) + eps)
        .collect();

    Ok(Coastline {
        longitude,
        latitude,
    })
}
