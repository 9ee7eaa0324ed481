use dotmatrix::{
    available_fonts,
    fonts::{FIFTEENDOTS, FIFTYDOTS, TWENTYFOURDOTS},
    parse_default, Align, CoordinateOptions, FontError, Grid, RenderOptions,
};
use pretty_assertions::assert_eq;

const TEXTS: [&str; 5] = ["", " ", "i", "Hello, World", "0123 456-789"];

fn option_sets() -> Vec<RenderOptions> {
    let mut sets = Vec::new();
    for proportional in [false, true] {
        for narrow in [false, true] {
            for intra in [0, 1, 3] {
                sets.push(RenderOptions {
                    proportional,
                    narrow,
                    intra,
                    ..Default::default()
                });
            }
        }
    }
    sets
}

#[test]
fn grids_are_rectangular() {
    for font in available_fonts() {
        for text in TEXTS {
            for options in option_sets() {
                for width in [None, Some(0), Some(7), Some(120)] {
                    let options = RenderOptions {
                        width,
                        ..options.clone()
                    };
                    let grid = font.grid(text, &options).unwrap();
                    assert_eq!(grid.height(), font.height());
                    let w = grid.width();
                    assert!(grid.rows().iter().all(|row| row.len() == w));
                    if let Some(width) = width {
                        assert_eq!(w, width, "{} {text:?} {options:?}", font.name());
                    }
                }
            }
        }
    }
}

#[test]
fn fixed_width_accounting() {
    for font in available_fonts() {
        for text in TEXTS {
            for intra in [0, 1, 2, 5] {
                let n = text.chars().count();
                let options = RenderOptions::fixed().with_intra(intra);
                assert_eq!(
                    font.number_of_pixels(text, &options).unwrap(),
                    n * font.width() + n.saturating_sub(1) * intra
                );
            }
        }
    }
}

#[test]
fn coordinates_reconstruct_grid() {
    for font in available_fonts() {
        for options in option_sets() {
            let grid = font.grid("Hello, World", &options).unwrap();
            let coords = font
                .coordinates("Hello, World", &options, &CoordinateOptions::default())
                .unwrap();
            let rebuilt = Grid::from_coordinates(grid.width(), grid.height(), coords);
            assert_eq!(rebuilt, grid);
        }
    }
}

#[test]
fn set_and_unset_coordinates_partition_the_grid() {
    let options = RenderOptions::proportional();
    let grid = FIFTYDOTS.grid("Dots", &options).unwrap();
    let set = grid.coordinates(&CoordinateOptions::default());
    let unset = grid.coordinates(&CoordinateOptions {
        value: false,
        ..Default::default()
    });
    assert_eq!(set.len() + unset.len(), grid.width() * grid.height());
    assert!(set.iter().all(|c| !unset.contains(c)));
}

#[test]
fn x_first_orders_by_column() {
    let projection = CoordinateOptions {
        x_first: true,
        ..Default::default()
    };
    let coords = FIFTEENDOTS
        .coordinates("Hi", &RenderOptions::default(), &projection)
        .unwrap();
    let mut sorted = coords.clone();
    sorted.sort();
    assert_eq!(coords, sorted);
    assert_eq!(coords[0], (0, 0));
}

#[test]
fn offsets_shift_coordinates() {
    let options = RenderOptions::proportional();
    let plain = FIFTEENDOTS
        .coordinates("i", &options, &CoordinateOptions::default())
        .unwrap();
    assert_eq!(plain, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
    let projection = CoordinateOptions {
        x_first: true,
        x_offset: 10,
        y_offset: -1,
        ..Default::default()
    };
    let shifted = FIFTEENDOTS.coordinates("i", &options, &projection).unwrap();
    assert_eq!(shifted, vec![(10, 0), (10, 1), (10, 2), (10, 3)]);
}

#[test]
fn padding_to_natural_width_is_identity() {
    for font in available_fonts() {
        let natural = font.grid("Hello", &RenderOptions::default()).unwrap();
        for align in [Align::Center, Align::Left, Align::Right] {
            let options = RenderOptions::default().with_width(natural.width(), align);
            assert_eq!(font.grid("Hello", &options).unwrap(), natural);
        }
    }
}

#[test]
fn cropping_keeps_a_contiguous_window() {
    let natural = TWENTYFOURDOTS.grid("mwGMW", &RenderOptions::default()).unwrap();
    for align in [Align::Center, Align::Left, Align::Right] {
        for width in 0..natural.width() {
            let options = RenderOptions::default().with_width(width, align);
            let cropped = TWENTYFOURDOTS.grid("mwGMW", &options).unwrap();
            let start = align.crop_start(natural.width() - width);
            assert_eq!(cropped, natural.crop(start, width));
            assert_eq!(cropped.width(), width);
        }
    }
}

#[test]
fn empty_text() {
    for font in available_fonts() {
        for options in option_sets() {
            let grid = font.grid("", &options).unwrap();
            assert_eq!(grid.height(), font.height());
            assert_eq!(grid.width(), 0);
            let text = font.grid_to_str("", "<", ">", &options).unwrap();
            assert_eq!(text, vec!["<>"; font.height()].join("\n"));
        }
    }
}

#[test]
fn empty_text_padded() {
    let options = RenderOptions::default().with_width(4, Align::Right);
    let grid = FIFTEENDOTS.grid("", &options).unwrap();
    assert_eq!(grid, Grid::blank(4, 5));
}

#[test]
fn invalid_arguments() {
    assert!(matches!(parse_default("  "), Err(FontError::InvalidArgument(_))));
    assert!(matches!(
        "justify".parse::<Align>(),
        Err(FontError::InvalidArgument(_))
    ));
    // fifteendots has no '?'
    let options = RenderOptions::default().with_default('?');
    assert!(matches!(
        FIFTEENDOTS.grid("~", &options),
        Err(FontError::InvalidArgument(_))
    ));
    assert!(matches!(
        FIFTEENDOTS.number_of_pixels("~", &options),
        Err(FontError::InvalidArgument(_))
    ));
}

#[test]
fn fonts_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                FIFTYDOTS
                    .number_of_pixels(&"x".repeat(i + 1), &RenderOptions::default())
                    .unwrap()
            })
        })
        .collect();
    let widths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(widths, vec![5, 11, 17, 23]);
}
