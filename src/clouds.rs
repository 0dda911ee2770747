//! Randomised colour "clouds": square elements re-placed on a timer.
//!
//! The field only decides positions, sizes and colours; a [`CloudHost`]
//! turns them into something visible.

use std::collections::VecDeque;

use crate::error::SetupError;

pub const CLOUD_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B6B9E", "#E9967A",
];

/// Class name the stylesheet hooks onto.
pub const CLOUD_CLASS: &str = "cloud";

/// Timing and sizing of one animator flavour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudVariant {
    pub count: usize,
    pub size_min: f64,
    pub size_span: f64,
    pub redraw_ms: i32,
    /// When set, one extra cloud is created every this many milliseconds and
    /// the oldest ones are dropped past `count * 1.5`.
    pub spawn_ms: Option<i32>,
}

impl CloudVariant {
    /// Fixed pool of 8.
    pub const CALM: Self = Self {
        count: 8,
        size_min: 150.0,
        size_span: 200.0,
        redraw_ms: 10_000,
        spawn_ms: None,
    };

    /// Pool of 12 that keeps growing up to 18, oldest evicted first.
    pub const DRIFTING: Self = Self {
        count: 12,
        size_min: 100.0,
        size_span: 300.0,
        redraw_ms: 8_000,
        spawn_ms: Some(5_000),
    };

    pub fn by_name(name: &str) -> Result<Self, SetupError> {
        match name {
            "calm" => Ok(Self::CALM),
            "drifting" => Ok(Self::DRIFTING),
            other => Err(SetupError::UnknownVariant(other.to_string())),
        }
    }

    /// Pool size above which the oldest cloud is evicted.
    pub fn capacity(&self) -> usize {
        self.count * 3 / 2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    /// Left edge, percent of the container width.
    pub x: f64,
    /// Top edge, percent of the container height.
    pub y: f64,
    /// Side length in pixels.
    pub size: f64,
    pub color: &'static str,
}

impl Cloud {
    /// Samples a cloud from `random`, which must yield values in `[0, 1)`.
    pub fn sample(variant: &CloudVariant, random: &mut impl FnMut() -> f64) -> Self {
        let x = random() * 100.0;
        let y = random() * 100.0;
        let size = variant.size_min + random() * variant.size_span;
        let pick = (random() * CLOUD_PALETTE.len() as f64) as usize;
        Self {
            x,
            y,
            size,
            color: CLOUD_PALETTE[pick.min(CLOUD_PALETTE.len() - 1)],
        }
    }

    pub fn style(&self) -> CloudStyle {
        CloudStyle {
            left: format!("{}%", self.x),
            top: format!("{}%", self.y),
            width: format!("{}px", self.size),
            height: format!("{}px", self.size),
            background_color: self.color.to_string(),
        }
    }
}

/// CSS property values for one cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudStyle {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
    pub background_color: String,
}

/// Where clouds live. In the browser an element is a `div` in the container.
pub trait CloudHost {
    type Element;

    fn create(&mut self, style: &CloudStyle) -> Result<Self::Element, SetupError>;

    fn restyle(&mut self, element: &Self::Element, style: &CloudStyle) -> Result<(), SetupError>;

    fn remove(&mut self, element: Self::Element);
}

pub struct CloudField<H: CloudHost, R> {
    host: H,
    random: R,
    variant: CloudVariant,
    clouds: VecDeque<(Cloud, H::Element)>,
}

impl<H, R> CloudField<H, R>
where
    H: CloudHost,
    R: FnMut() -> f64,
{
    pub fn new(host: H, random: R, variant: CloudVariant) -> Self {
        Self {
            host,
            random,
            variant,
            clouds: VecDeque::with_capacity(variant.capacity() + 1),
        }
    }

    pub fn variant(&self) -> &CloudVariant {
        &self.variant
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Oldest first.
    pub fn clouds(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter().map(|(cloud, _)| cloud)
    }

    /// Creates the initial pool.
    pub fn populate(&mut self) -> Result<(), SetupError> {
        for _ in 0..self.variant.count {
            self.spawn()?;
        }
        log::info!("populated {} clouds", self.clouds.len());
        Ok(())
    }

    /// Adds one cloud, evicting the oldest if the pool is now over capacity.
    pub fn spawn(&mut self) -> Result<(), SetupError> {
        let cloud = Cloud::sample(&self.variant, &mut self.random);
        let element = self.host.create(&cloud.style())?;
        self.clouds.push_back((cloud, element));

        if self.clouds.len() > self.variant.capacity() {
            if let Some((_, oldest)) = self.clouds.pop_front() {
                self.host.remove(oldest);
            }
        }
        Ok(())
    }

    /// Re-samples every cloud in place. A cloud keeps its old placement
    /// unless the host accepted the new style.
    pub fn redraw(&mut self) -> Result<(), SetupError> {
        for (cloud, element) in self.clouds.iter_mut() {
            let next = Cloud::sample(&self.variant, &mut self.random);
            self.host.restyle(element, &next.style())?;
            *cloud = next;
        }
        Ok(())
    }
}
