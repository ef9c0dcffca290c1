mod support;
mod test_error;
