#[cfg(test)]
mod support;

mod showroom;
