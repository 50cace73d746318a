// Domain layer - Probe result model

pub mod model;
