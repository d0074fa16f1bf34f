/// File-backed trace loading through the public `Simulator::open` path.
pub mod trace_file;
