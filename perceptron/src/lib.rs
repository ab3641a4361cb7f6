#![deny(warnings)]

pub mod dataset;
pub mod math;
pub mod perceptron;
pub mod report;
