mod aggregator;
mod panel;
