use aws_sdk_s3::error::{BuildError, SdkError};
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketError;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

/// Result type alias for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Error types for bucket operations
#[derive(Error, Debug)]
pub enum BucketError {
    /// Error creating a bucket
    #[error("Failed to create bucket")]
    CreateBucket(#[from] SdkError<CreateBucketError>),

    /// Error listing buckets
    #[error("Failed to list buckets")]
    ListBuckets(#[from] SdkError<ListBucketsError>),

    /// Error uploading an object
    #[error("Failed to upload object")]
    PutObject(#[from] SdkError<PutObjectError>),

    /// Error listing objects in a bucket
    #[error("Failed to list objects")]
    ListObjects(#[from] SdkError<ListObjectsV2Error>),

    /// Error deleting objects from a bucket
    #[error("Failed to delete objects")]
    DeleteObjects(#[from] SdkError<DeleteObjectsError>),

    /// Error deleting a bucket
    #[error("Failed to delete bucket")]
    DeleteBucket(#[from] SdkError<DeleteBucketError>),

    /// Error building a delete request
    #[error("Failed to build delete request: {0}")]
    RequestBuild(#[from] BuildError),
}
