mod downloader_tests;
