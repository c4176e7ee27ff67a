pub mod chart_writer;
