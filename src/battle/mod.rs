pub mod damage;
pub mod minimax;
pub mod runner;
pub mod state;

#[cfg(test)]
mod tests;
