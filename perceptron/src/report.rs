use plotters::{
    prelude::{BitMapBackend, ChartBuilder, IntoDrawingArea, LabelAreaPosition},
    series::LineSeries,
    style::{GREEN, WHITE},
};

pub struct EpochError {
    pub epoch: usize,
    pub sum_squared_error: f32,
}

impl From<&EpochError> for (usize, f32) {
    fn from(e: &EpochError) -> Self {
        let EpochError {
            epoch,
            sum_squared_error,
        } = e;
        (*epoch, *sum_squared_error)
    }
}

pub fn epoch_errors(history: &[f32]) -> Vec<EpochError> {
    history
        .iter()
        .enumerate()
        .map(|(epoch, sum_squared_error)| EpochError {
            epoch,
            sum_squared_error: *sum_squared_error,
        })
        .collect()
}

/// The two diagnostic lines the trainer historically printed itself:
/// final weights and the full per-epoch error history.
pub fn print_training_summary(weights: &[f32], history: &[f32]) {
    println!("Weights: {:?}", weights);
    println!("The errors are: {:?}", history);
}

pub fn plot_errors(epoch_errors: Vec<EpochError>) {
    let max_epoch = epoch_errors.iter().map(|x| x.epoch).max().unwrap();
    let max_error = epoch_errors
        .iter()
        .map(|x| x.sum_squared_error)
        .reduce(f32::max)
        .unwrap();
    let root_area = BitMapBackend::new("errors.png", (1920, 1080)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut ctx = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 40)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Sum squared error", ("sans-serif", 40))
        .build_cartesian_2d(0..max_epoch, 0.0..(max_error + 1.0))
        .unwrap();

    ctx.configure_mesh().draw().unwrap();

    ctx.draw_series(LineSeries::new(
        epoch_errors.iter().map(|point| point.into()),
        &GREEN,
    ))
    .unwrap();
}
