pub mod conf;

#[cfg(test)]
mod tests;
