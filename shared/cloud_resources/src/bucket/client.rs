//! S3 bucket client for the demo workflow

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration, Delete, ObjectIdentifier};
use aws_sdk_s3::Client as S3Client;
use tracing::{debug, error, info};

use super::error::BucketResult;

/// The one region that must not carry a location constraint on creation
const DEFAULT_REGION: &str = "us-east-1";

/// Bucket client wrapping the provider's object-storage API
pub struct BucketClient {
    client: S3Client,
    region: Option<String>,
}

impl BucketClient {
    /// Creates a bucket client from a shared SDK configuration
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        let region = config.region().map(std::string::ToString::to_string);
        Self {
            client: S3Client::new(config),
            region,
        }
    }

    /// Creates a bucket, applying a location constraint outside the default
    /// region
    ///
    /// # Errors
    ///
    /// Returns `BucketError::CreateBucket` if the provider call fails
    pub async fn create_bucket(&self, name: &str) -> BucketResult<()> {
        let mut request = self.client.create_bucket().bucket(name);

        if let Some(region) = self.region.as_deref() {
            if region != DEFAULT_REGION {
                let constraint = BucketLocationConstraint::from(region);
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(constraint)
                        .build(),
                );
            }
        }

        request.send().await?;
        info!("Created bucket {name}");
        Ok(())
    }

    /// Lists the names of all buckets
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ListBuckets` if the provider call fails
    pub async fn list_buckets(&self) -> BucketResult<Vec<String>> {
        let result = self.client.list_buckets().send().await?;

        Ok(result
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(std::string::ToString::to_string))
            .collect())
    }

    /// Uploads a single empty-bodied object
    ///
    /// # Errors
    ///
    /// Returns `BucketError::PutObject` if the provider call fails
    pub async fn put_empty_object(&self, bucket: &str, key: &str) -> BucketResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from_static(b""))
            .send()
            .await?;

        info!("Uploaded empty object {key} to bucket {bucket}");
        Ok(())
    }

    /// Lists the object keys in a bucket
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ListObjects` if the provider call fails
    pub async fn list_objects(&self, bucket: &str) -> BucketResult<Vec<String>> {
        let result = self.client.list_objects_v2().bucket(bucket).send().await?;

        Ok(result
            .contents()
            .iter()
            .filter_map(|object| object.key().map(std::string::ToString::to_string))
            .collect())
    }

    /// Deletes every object in a bucket, then the bucket itself
    ///
    /// # Errors
    ///
    /// Returns the first `BucketError` hit while listing, deleting objects,
    /// or deleting the bucket.
    pub async fn empty_and_delete(&self, bucket: &str) -> BucketResult<()> {
        let keys = self.list_objects(bucket).await?;

        if !keys.is_empty() {
            let mut delete = Delete::builder();
            for key in &keys {
                delete = delete.objects(ObjectIdentifier::builder().key(key).build()?);
            }

            self.client
                .delete_objects()
                .bucket(bucket)
                .delete(delete.build()?)
                .send()
                .await?;

            debug!("Deleted {} objects from bucket {bucket}", keys.len());
        }

        self.client.delete_bucket().bucket(bucket).send().await?;
        info!("Deleted bucket {bucket}");
        Ok(())
    }

    /// Empties and deletes every bucket, continuing past per-bucket failures
    ///
    /// Returns the names that were deleted.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ListBuckets` if the enumeration itself fails;
    /// individual bucket failures are logged and skipped.
    pub async fn delete_all_buckets(&self) -> BucketResult<Vec<String>> {
        let buckets = self.list_buckets().await?;
        let mut deleted = Vec::with_capacity(buckets.len());

        for bucket in buckets {
            match self.empty_and_delete(&bucket).await {
                Ok(()) => deleted.push(bucket),
                Err(e) => error!("Failed to delete bucket {bucket}: {e}"),
            }
        }

        Ok(deleted)
    }
}
