/// A fixed-width table of feature rows, stored row-major in a single
/// buffer. Every row has the same length by construction, so training
/// never has to re-check the shape.
pub struct Dataset {
    values: Vec<f32>,
    width: usize,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let width = match rows.first() {
            Some(row) => row.len(),
            None => 0,
        };

        let mut values = Vec::with_capacity(rows.len() * width);
        for row in rows {
            if row.len() != width {
                panic!("All feature rows must have the same length");
            }
            values.extend(row);
        }
        Self { values, width }
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.width..(i + 1) * self.width]
    }

    pub fn len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.values.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> usize {
        self.width
    }
}
