use std::cell::Cell;

use partsample_core::{
    sample, sample_batch, weight, DrawSample, ErrorInfo, FourMomentum, MultiParticle,
    MultiParticleDistribution, ParticleDirection, ParticleSpecies, ParticleState, ProcessLike,
    RngHandle, Sampleable, SampleableExt, SamplingError, SingleParticle, Species,
};
use rand::Rng;

#[derive(Debug, Clone)]
struct CoinParticle {
    heads: ParticleState<Species>,
    tails: ParticleState<Species>,
}

impl CoinParticle {
    fn new() -> Self {
        let electron = Species::new("electron", 0.511);
        Self {
            heads: ParticleState::new(
                electron.clone(),
                ParticleDirection::Incoming,
                FourMomentum::new(1.0, 0.0, 0.0, 0.86),
            ),
            tails: ParticleState::new(
                electron,
                ParticleDirection::Incoming,
                FourMomentum::new(1.0, 0.0, 0.0, -0.86),
            ),
        }
    }
}

impl Sampleable for CoinParticle {
    type Shape = SingleParticle;
    type Element = ParticleState<Species>;

    fn is_exact(&self) -> bool {
        true
    }

    fn raw_weight(&self, x: &ParticleState<Species>) -> f64 {
        if x == &self.heads || x == &self.tails {
            0.5
        } else {
            0.0
        }
    }

    fn max_weight(&self) -> f64 {
        0.5
    }
}

impl DrawSample for CoinParticle {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleState<Species> {
        if rng.gen_bool(0.5) {
            self.heads.clone()
        } else {
            self.tails.clone()
        }
    }
}

#[test]
fn coin_particle_weights_both_faces_equally() {
    let coin = CoinParticle::new();
    assert!(coin.is_exact());
    assert_eq!(coin.max_weight(), 0.5);
    assert_eq!(weight(&coin, &coin.heads).unwrap(), 0.5);
    assert_eq!(weight(&coin, &coin.tails).unwrap(), 0.5);
}

#[test]
fn coin_particle_only_produces_its_faces() {
    let coin = CoinParticle::new();
    let mut rng = RngHandle::from_seed(2024);
    let draws = sample_batch(&mut rng, &coin, 200);
    assert_eq!(draws.len(), 200);
    assert!(draws.iter().all(|x| x == &coin.heads || x == &coin.tails));
    assert!(draws.iter().any(|x| x == &coin.heads));
    assert!(draws.iter().any(|x| x == &coin.tails));
    for x in &draws {
        assert_eq!(coin.weight(x).unwrap(), 0.5);
    }
}

struct ThreeBody {
    particles: Vec<Species>,
}

impl ThreeBody {
    fn new() -> Self {
        Self {
            particles: vec![
                Species::new("electron", 0.511),
                Species::new("positron", 0.511),
                Species::new("photon", 0.0),
            ],
        }
    }
}

impl Sampleable for ThreeBody {
    type Shape = MultiParticle;
    type Element = Vec<ParticleState<Species>>;

    fn is_exact(&self) -> bool {
        true
    }

    fn raw_weight(&self, _x: &Self::Element) -> f64 {
        1.0
    }

    fn max_weight(&self) -> f64 {
        1.0
    }
}

impl MultiParticleDistribution for ThreeBody {
    type Particle = Species;

    fn particles(&self) -> &[Species] {
        &self.particles
    }

    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, buf: &mut [ParticleState<Species>]) {
        for state in buf.iter_mut() {
            let p = nalgebra::Vector3::new(rng.gen(), rng.gen(), rng.gen());
            state.momentum = FourMomentum::on_shell(state.species.mass(), p);
        }
    }
}

#[test]
fn three_body_reports_its_layout() {
    let d = ThreeBody::new();
    assert_eq!(d.len(), 3);
    assert_eq!(d.size(), (3,));
    assert_eq!(d.particle_directions(), vec![ParticleDirection::Unknown; 3]);
}

#[test]
fn three_body_sample_keeps_particle_order() {
    let d = ThreeBody::new();
    let mut rng = RngHandle::from_seed(8);
    let x = sample(&mut rng, &d);
    assert_eq!(x.len(), 3);
    for (state, species) in x.iter().zip(d.particles()) {
        assert_eq!(&state.species, species);
        assert_eq!(state.direction, ParticleDirection::Unknown);
        assert!(state.momentum.is_physical(1e-9));
    }
    assert_eq!(weight(&d, &x).unwrap(), 1.0);

    let batch = sample_batch(&mut rng, &d, 5);
    assert_eq!(batch.len(), 5);
    assert!(batch.iter().all(|x| x.len() == 3));
}

struct EnergyGuard {
    raw_calls: Cell<usize>,
}

impl Sampleable for EnergyGuard {
    type Shape = ProcessLike;
    type Element = Vec<FourMomentum>;

    fn is_exact(&self) -> bool {
        false
    }

    fn raw_weight(&self, x: &Vec<FourMomentum>) -> f64 {
        self.raw_calls.set(self.raw_calls.get() + 1);
        x.iter().map(|p| p.energy()).sum()
    }

    fn max_weight(&self) -> f64 {
        f64::INFINITY
    }

    fn assert_valid_input(&self, x: &Vec<FourMomentum>) -> Result<(), SamplingError> {
        match x.iter().position(|p| p.energy() < 0.0) {
            Some(index) => Err(SamplingError::InvalidInput(
                ErrorInfo::new("guard.negative_energy", "negative energy component")
                    .with_context("index", index.to_string()),
            )),
            None => Ok(()),
        }
    }
}

#[test]
fn invalid_sample_never_reaches_raw_weight() {
    let guard = EnergyGuard {
        raw_calls: Cell::new(0),
    };
    let bad = vec![
        FourMomentum::new(2.0, 0.0, 0.0, 1.0),
        FourMomentum::new(-1.0, 0.0, 0.0, 0.0),
    ];
    let err = weight(&guard, &bad).unwrap_err();
    assert!(matches!(err, SamplingError::InvalidInput(_)));
    assert_eq!(err.info().context["index"], "1");
    assert_eq!(guard.raw_calls.get(), 0);

    let good = vec![FourMomentum::new(2.0, 0.0, 0.0, 1.0)];
    assert_eq!(weight(&guard, &good).unwrap(), 2.0);
    assert_eq!(guard.raw_calls.get(), 1);
}

/// Declares a direction only for its first particle.
struct PartialBeams {
    particles: Vec<Species>,
}

impl Sampleable for PartialBeams {
    type Shape = MultiParticle;
    type Element = Vec<ParticleState<Species>>;

    fn is_exact(&self) -> bool {
        true
    }

    fn raw_weight(&self, _x: &Self::Element) -> f64 {
        1.0
    }

    fn max_weight(&self) -> f64 {
        1.0
    }
}

impl MultiParticleDistribution for PartialBeams {
    type Particle = Species;

    fn particles(&self) -> &[Species] {
        &self.particles
    }

    fn particle_directions(&self) -> Vec<ParticleDirection> {
        vec![ParticleDirection::Incoming]
    }

    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, buf: &mut [ParticleState<Species>]) {
        for state in buf.iter_mut() {
            let e = rng.gen_range(1.0..2.0);
            state.momentum = FourMomentum::new(e, 0.0, 0.0, e);
        }
    }
}

#[test]
fn short_direction_list_still_fills_every_slot() {
    let d = PartialBeams {
        particles: vec![Species::new("gluon", 0.0); 3],
    };
    let buf = d.allocate_sample();
    assert_eq!(buf.len(), d.len());
    assert_eq!(buf[0].direction, ParticleDirection::Incoming);
    assert_eq!(buf[1].direction, ParticleDirection::Unknown);
    assert_eq!(buf[2].direction, ParticleDirection::Unknown);

    let mut rng = RngHandle::from_seed(30);
    let x = sample(&mut rng, &d);
    assert_eq!(x.len(), 3);
    assert!(x.iter().all(|state| state.momentum.energy() >= 1.0));
}
