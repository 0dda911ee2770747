use cosmic_artworks::clouds::{
    Cloud, CloudField, CloudHost, CloudStyle, CloudVariant, CLOUD_PALETTE,
};
use cosmic_artworks::SetupError;

/// Elements are ids; tracks which are attached and their latest style.
#[derive(Default)]
struct FakeHost {
    next_id: usize,
    attached: Vec<(usize, CloudStyle)>,
    removed: Vec<usize>,
    reject_restyle_of: Option<usize>,
}

impl FakeHost {
    fn style_of(&self, id: usize) -> &CloudStyle {
        &self
            .attached
            .iter()
            .find(|(i, _)| *i == id)
            .expect("attached")
            .1
    }
}

impl CloudHost for FakeHost {
    type Element = usize;

    fn create(&mut self, style: &CloudStyle) -> Result<usize, SetupError> {
        let id = self.next_id;
        self.next_id += 1;
        self.attached.push((id, style.clone()));
        Ok(id)
    }

    fn restyle(&mut self, element: &usize, style: &CloudStyle) -> Result<(), SetupError> {
        if self.reject_restyle_of == Some(*element) {
            return Err(SetupError::Dom(format!("element {element} rejected style")));
        }
        let slot = self
            .attached
            .iter_mut()
            .find(|(i, _)| i == element)
            .ok_or_else(|| SetupError::Dom(format!("element {element} detached")))?;
        slot.1 = style.clone();
        Ok(())
    }

    fn remove(&mut self, element: usize) {
        self.attached.retain(|(i, _)| *i != element);
        self.removed.push(element);
    }
}

/// Deterministic stand-in for `Math.random`.
fn sequence(values: &'static [f64]) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn sample_maps_unit_randoms_onto_ranges() {
    let mut random = sequence(&[0.25, 0.5, 0.5, 0.999]);
    let cloud = Cloud::sample(&CloudVariant::CALM, &mut random);
    assert_eq!(cloud.x, 25.0);
    assert_eq!(cloud.y, 50.0);
    assert_eq!(cloud.size, 250.0);
    assert_eq!(cloud.color, "#E9967A");

    let mut random = sequence(&[0.0]);
    let cloud = Cloud::sample(&CloudVariant::DRIFTING, &mut random);
    assert_eq!(cloud.size, 100.0);
    assert_eq!(cloud.color, CLOUD_PALETTE[0]);
}

#[test]
fn style_uses_percent_position_and_pixel_size() {
    let cloud = Cloud {
        x: 12.5,
        y: 80.0,
        size: 175.5,
        color: "#4ECDC4",
    };
    let style = cloud.style();
    assert_eq!(style.left, "12.5%");
    assert_eq!(style.top, "80%");
    assert_eq!(style.width, "175.5px");
    assert_eq!(style.height, "175.5px");
    assert_eq!(style.background_color, "#4ECDC4");
}

#[test]
fn populate_creates_the_configured_pool() {
    let mut field = CloudField::new(
        FakeHost::default(),
        sequence(&[0.1, 0.7, 0.3, 0.6]),
        CloudVariant::CALM,
    );
    field.populate().expect("populate");
    assert_eq!(field.len(), 8);
    assert_eq!(field.host().attached.len(), 8);
    for cloud in field.clouds() {
        assert!((0.0..100.0).contains(&cloud.x));
        assert!((150.0..350.0).contains(&cloud.size));
    }
}

#[test]
fn redraw_restyles_every_cloud_in_place() {
    let mut field = CloudField::new(
        FakeHost::default(),
        sequence(&[
            0.1, 0.2, 0.3, 0.4, 0.9, 0.8, 0.7, 0.6, 0.55, 0.15, 0.35, 0.05,
        ]),
        CloudVariant::CALM,
    );
    field.populate().expect("populate");
    let before: Vec<Cloud> = field.clouds().cloned().collect();
    field.redraw().expect("redraw");
    let after: Vec<Cloud> = field.clouds().cloned().collect();

    assert_eq!(field.len(), 8);
    assert_ne!(before, after);
    for (id, cloud) in after.iter().enumerate() {
        assert_eq!(field.host().style_of(id), &cloud.style());
    }
    assert!(field.host().removed.is_empty());
}

#[test]
fn failed_restyle_keeps_cloud_in_sync_with_its_element() {
    let mut field = CloudField::new(
        FakeHost::default(),
        sequence(&[
            0.1, 0.2, 0.3, 0.4, 0.9, 0.8, 0.7, 0.6, 0.55, 0.15, 0.35, 0.05,
        ]),
        CloudVariant::CALM,
    );
    field.populate().expect("populate");
    let before: Vec<Cloud> = field.clouds().cloned().collect();

    field.host_mut().reject_restyle_of = Some(3);
    assert!(field.redraw().is_err());
    let after: Vec<Cloud> = field.clouds().cloned().collect();

    // Clouds before the failure moved, the rejected one and the rest did not.
    assert_ne!(after[..3], before[..3]);
    assert_eq!(after[3..], before[3..]);
    for (id, cloud) in after.iter().enumerate() {
        assert_eq!(field.host().style_of(id), &cloud.style());
    }
}

#[test]
fn drifting_pool_evicts_oldest_past_capacity() {
    let variant = CloudVariant::DRIFTING;
    assert_eq!(variant.capacity(), 18);

    let mut field = CloudField::new(FakeHost::default(), sequence(&[0.42]), variant);
    field.populate().expect("populate");
    for _ in 0..6 {
        field.spawn().expect("spawn");
    }
    assert_eq!(field.len(), 18);
    assert!(field.host().removed.is_empty());

    field.spawn().expect("spawn");
    field.spawn().expect("spawn");
    assert_eq!(field.len(), 18);
    assert_eq!(field.host().removed, vec![0, 1]);
    assert_eq!(field.host().attached.first().map(|(id, _)| *id), Some(2));
}

#[test]
fn variants_resolve_by_name() {
    assert_eq!(CloudVariant::by_name("calm"), Ok(CloudVariant::CALM));
    assert_eq!(CloudVariant::by_name("drifting"), Ok(CloudVariant::DRIFTING));
    assert_eq!(
        CloudVariant::by_name("stormy"),
        Err(SetupError::UnknownVariant("stormy".to_string()))
    );
    assert_eq!(CloudVariant::CALM.spawn_ms, None);
}
