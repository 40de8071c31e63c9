pub mod commission_pipeline;
