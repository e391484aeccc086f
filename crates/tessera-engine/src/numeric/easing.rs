use std::f64::consts::{FRAC_PI_2, TAU};

use super::Frac;

const PERIOD: f64 = 0.3;
const OVERSHOOT: f64 = 1.70158;

/// Easing curves mapping a time fraction to a progress fraction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Easing {
    Linear,

    // Sine
    EaseIn,
    EaseOut,
    EaseInOut,

    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,

    BackIn,
    BackOut,
    BackInOut,

    BounceIn,
    BounceOut,
    BounceInOut,

    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl Easing {
    pub const ALL: [Easing; 16] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    pub fn apply(self, t: Frac) -> Frac {
        match self {
            Easing::Linear => t,

            Easing::EaseIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::EaseOut => (t * FRAC_PI_2).sin(),
            Easing::EaseInOut => {
                let a = (t * FRAC_PI_2).sin();
                a * a
            }

            Easing::ExponentialIn => {
                if t == 0.0 { 0.0 } else { 2f64.powf(10.0 * (t - 1.0)) - 0.001 }
            }
            Easing::ExponentialOut => {
                if t == 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * t) }
            }
            Easing::ExponentialInOut => {
                let t = t / 0.5;
                if t < 1.0 {
                    0.5 * 2f64.powf(10.0 * (t - 1.0))
                } else {
                    0.5 * (2.0 - 2f64.powf(-10.0 * (t - 1.0)))
                }
            }

            Easing::BackIn => t * t * ((OVERSHOOT + 1.0) * t - OVERSHOOT),
            Easing::BackOut => {
                let t = t - 1.0;
                t * t * ((OVERSHOOT + 1.0) * t + OVERSHOOT) + 1.0
            }
            Easing::BackInOut => {
                let overshoot = OVERSHOOT * 1.525;
                let t = t * 2.0;
                if t < 1.0 {
                    (t * t * ((overshoot + 1.0) * t - overshoot)) / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * ((overshoot + 1.0) * t + overshoot)) / 2.0 + 1.0
                }
            }

            Easing::BounceIn => {
                if t == 0.0 || t == 1.0 { t } else { 1.0 - bounce_time(1.0 - t) }
            }
            Easing::BounceOut => {
                if t == 0.0 || t == 1.0 { t } else { bounce_time(t) }
            }
            Easing::BounceInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    (1.0 - bounce_time(1.0 - t * 2.0)) * 0.5
                } else {
                    bounce_time(t * 2.0 - 1.0) * 0.5 + 0.5
                }
            }

            Easing::ElasticIn => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let s = PERIOD / 4.0;
                    let t = t - 1.0;
                    -(2f64.powf(10.0 * t)) * ((t - s) * TAU / PERIOD).sin()
                }
            }
            Easing::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let s = PERIOD / 4.0;
                    2f64.powf(-10.0 * t) * ((t - s) * TAU / PERIOD).sin() + 1.0
                }
            }
            Easing::ElasticInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let s = PERIOD / 4.0;
                    let t = t * 2.0 - 1.0;
                    if t < 0.0 {
                        -0.5 * 2f64.powf(10.0 * t) * ((t - s) * TAU / PERIOD).sin()
                    } else {
                        2f64.powf(-10.0 * t) * ((t - s) * TAU / PERIOD).sin() * 0.5 + 1.0
                    }
                }
            }
        }
    }
}

fn bounce_time(t: f64) -> f64 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}
