pub mod mock_download_client;
