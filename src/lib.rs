pub mod net;
pub mod scenario;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
