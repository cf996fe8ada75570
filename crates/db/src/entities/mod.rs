pub mod generation_log;
