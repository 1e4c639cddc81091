use proptest::prelude::*;
use word_cloud_canvas::cloud::{
	InteractionController, LayoutMode, LayoutOptions, Settings, Size, SpiralShape, WordEvent,
	WordId, layout,
};

fn settings(font_size: f64) -> Settings {
	Settings {
		font_size,
		..Settings::default()
	}
}

fn shape_strategy() -> impl Strategy<Value = SpiralShape> {
	prop_oneof![Just(SpiralShape::Archimedean), Just(SpiralShape::Rectangular)]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn every_word_is_placed_inside_the_canvas(
		words in prop::collection::vec("[a-z]{1,10}", 0..30),
		width in 200.0f64..1600.0,
		height in 150.0f64..1200.0,
		font_size in 8.0f64..40.0,
		shape in shape_strategy(),
		seed in any::<u64>(),
	) {
		let options = LayoutOptions {
			mode: LayoutMode::Spiral(shape),
			seed,
			..LayoutOptions::default()
		};
		let list = layout(&words, Size::new(width, height), &settings(font_size), &options);
		prop_assert_eq!(list.len(), words.len());
		for (i, p) in list.iter().enumerate() {
			prop_assert_eq!(p.id, WordId(i));
			prop_assert_eq!(&p.text, &words[i]);
			prop_assert!(p.x >= 0.0 && p.x <= width);
			prop_assert!(p.y >= 0.0 && p.y <= height);
		}
	}

	#[test]
	fn sparse_clouds_never_overlap(
		words in prop::collection::vec("[a-z]{1,8}", 1..12),
		font_size in 10.0f64..20.0,
		shape in shape_strategy(),
		seed in any::<u64>(),
	) {
		let options = LayoutOptions {
			mode: LayoutMode::Spiral(shape),
			seed,
			..LayoutOptions::default()
		};
		let list = layout(&words, Size::new(1000.0, 800.0), &settings(font_size), &options);
		prop_assert!(!list.has_overflow());
		let placements = list.placements();
		for (i, a) in placements.iter().enumerate() {
			for b in &placements[i + 1..] {
				prop_assert!(!a.bounds().intersects(&b.bounds()));
			}
		}
	}

	#[test]
	fn fitted_words_never_overlap_earlier_words(
		words in prop::collection::vec("[a-z]{3,12}", 1..25),
		seed in any::<u64>(),
	) {
		let options = LayoutOptions { seed, ..LayoutOptions::default() };
		let list = layout(&words, Size::new(400.0, 300.0), &settings(24.0), &options);
		let placements = list.placements();
		for (i, later) in placements.iter().enumerate() {
			if list.overflowed().contains(&later.id) {
				continue;
			}
			for earlier in &placements[..i] {
				prop_assert!(!later.bounds().intersects(&earlier.bounds()));
			}
		}
	}

	#[test]
	fn drags_stay_inside_the_canvas(
		x in -5000.0f64..5000.0,
		y in -5000.0f64..5000.0,
	) {
		let mut controller = InteractionController::new(layout(
			&["alpha", "beta"],
			Size::new(800.0, 600.0),
			&settings(20.0),
			&LayoutOptions::default(),
		));
		let origin = controller.on_drag_move(WordId(1), x, y).unwrap();
		let size = controller.placements().get(WordId(1)).unwrap().size;
		prop_assert!(origin.x >= 0.0 && origin.x <= 800.0 - size.width);
		prop_assert!(origin.y >= 0.0 && origin.y <= 600.0 - size.height);
	}

	#[test]
	fn commit_emits_rename_only_for_new_text(text in "[a-z ]{0,12}") {
		let mut controller = InteractionController::new(layout(
			&["alpha"],
			Size::new(800.0, 600.0),
			&settings(20.0),
			&LayoutOptions::default(),
		));
		let event = controller.on_text_commit(WordId(0), &text);
		let trimmed = text.trim();
		if trimmed.is_empty() || trimmed == "alpha" {
			prop_assert_eq!(event, None);
		} else {
			prop_assert_eq!(
				event,
				Some(WordEvent::Renamed { old: "alpha".into(), new: trimmed.to_owned() })
			);
		}
	}
}

#[test]
fn alpha_then_beta_scenario() {
	let list = layout(
		&["alpha", "beta"],
		Size::new(800.0, 600.0),
		&settings(20.0),
		&LayoutOptions::default(),
	);
	let texts: Vec<&str> = list.iter().map(|p| p.text.as_str()).collect();
	assert_eq!(texts, ["alpha", "beta"]);
	let (a, b) = (&list.placements()[0], &list.placements()[1]);
	assert!(!a.bounds().intersects(&b.bounds()));
	for p in [a, b] {
		assert!(p.x >= 0.0 && p.x + p.size.width <= 800.0);
		assert!(p.y >= 0.0 && p.y + p.size.height <= 600.0);
	}
}

#[test]
fn empty_word_list_is_not_an_error() {
	let words: Vec<String> = Vec::new();
	let list = layout(
		&words,
		Size::new(800.0, 600.0),
		&Settings::default(),
		&LayoutOptions::default(),
	);
	assert!(list.is_empty());
}
