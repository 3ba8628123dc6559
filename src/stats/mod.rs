pub mod timing_measurement;
