pub mod fee_writer;
