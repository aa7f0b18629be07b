use aws_sdk_ec2::error::SdkError;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesError;
use aws_sdk_ec2::operation::run_instances::RunInstancesError;
use aws_sdk_ec2::operation::terminate_instances::TerminateInstancesError;
use thiserror::Error;

/// Result type alias for compute operations
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Error types for compute operations
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error launching an instance
    #[error("Failed to launch instance")]
    RunInstances(#[from] SdkError<RunInstancesError>),

    /// Error describing instances
    #[error("Failed to describe instances")]
    DescribeInstances(#[from] SdkError<DescribeInstancesError>),

    /// Error terminating instances
    #[error("Failed to terminate instances")]
    TerminateInstances(#[from] SdkError<TerminateInstancesError>),

    /// The provider did not return an instance ID for the launch
    #[error("Instance ID missing from provider response")]
    MissingInstanceId,
}
